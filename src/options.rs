//! Environment configuration options.

/// Advisory render mode, mirrored to presentation collaborators.
///
/// The environment itself never renders anything; the mode is carried
/// metadata that a downstream display layer may consult via
/// [`options`](crate::BlackjackEnv::options).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RenderMode {
    /// Live human-facing display.
    Human,
    /// Off-screen pixel-buffer rendering.
    RgbArray,
}

/// Configuration options for a blackjack environment.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjgym::EnvOptions;
///
/// let options = EnvOptions::default()
///     .with_natural(true)
///     .with_sab(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvOptions {
    /// Whether a winning player natural pays 3:2 (reward 1.5) instead of
    /// even money. Ignored when `sab` is set.
    pub natural: bool,
    /// Whether naturals are scored as in Sutton & Barto: a player natural
    /// wins outright with reward 1.0 unless the dealer also holds one.
    /// Takes precedence over `natural`.
    pub sab: bool,
    /// Advisory render mode, if any.
    pub render_mode: Option<RenderMode>,
}

impl EnvOptions {
    /// Sets whether a winning player natural pays 3:2.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::EnvOptions;
    ///
    /// let options = EnvOptions::default().with_natural(true);
    /// assert_eq!(options.natural, true);
    /// ```
    #[must_use]
    pub const fn with_natural(mut self, natural: bool) -> Self {
        self.natural = natural;
        self
    }

    /// Sets whether naturals are scored as in Sutton & Barto.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::EnvOptions;
    ///
    /// let options = EnvOptions::default().with_sab(true);
    /// assert_eq!(options.sab, true);
    /// ```
    #[must_use]
    pub const fn with_sab(mut self, sab: bool) -> Self {
        self.sab = sab;
        self
    }

    /// Sets the advisory render mode.
    ///
    /// # Example
    ///
    /// ```
    /// use bjgym::{EnvOptions, RenderMode};
    ///
    /// let options = EnvOptions::default().with_render_mode(RenderMode::Human);
    /// assert_eq!(options.render_mode, Some(RenderMode::Human));
    /// ```
    #[must_use]
    pub const fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = Some(render_mode);
        self
    }
}
