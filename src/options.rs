//! Classifier configuration options.

/// Configuration options for a [`HandClassifier`](crate::HandClassifier).
///
/// The defaults classify any hand permissively: no two-pair detection, no
/// size check and no duplicate check. Use the builder methods to tighten
/// the rules:
///
/// ```
/// use pokerhand::ClassifierOptions;
///
/// let options = ClassifierOptions::default()
///     .with_two_pair(true)
///     .with_hand_size(Some(5))
///     .with_reject_duplicates(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassifierOptions {
    /// Whether two distinct pairs are reported as [`HandRank::TwoPair`](crate::HandRank::TwoPair).
    pub two_pair: bool,
    /// Number of cards a hand must hold for validated ranking.
    /// `None` accepts any non-empty hand.
    pub hand_size: Option<usize>,
    /// Whether validated ranking rejects hands holding the same card twice.
    pub reject_duplicates: bool,
}

impl ClassifierOptions {
    /// Options for standard five-card poker: two-pair detection on, exactly
    /// five distinct cards required for validated ranking.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhand::ClassifierOptions;
    ///
    /// let options = ClassifierOptions::five_card();
    /// assert!(options.two_pair);
    /// assert_eq!(options.hand_size, Some(5));
    /// assert!(options.reject_duplicates);
    /// ```
    #[must_use]
    pub const fn five_card() -> Self {
        Self {
            two_pair: true,
            hand_size: Some(5),
            reject_duplicates: true,
        }
    }

    /// Sets whether two distinct pairs are reported as two pair.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhand::ClassifierOptions;
    ///
    /// let options = ClassifierOptions::default().with_two_pair(true);
    /// assert_eq!(options.two_pair, true);
    /// ```
    #[must_use]
    pub const fn with_two_pair(mut self, enabled: bool) -> Self {
        self.two_pair = enabled;
        self
    }

    /// Sets the required hand size for validated ranking.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhand::ClassifierOptions;
    ///
    /// let options = ClassifierOptions::default().with_hand_size(Some(5));
    /// assert_eq!(options.hand_size, Some(5));
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, size: Option<usize>) -> Self {
        self.hand_size = size;
        self
    }

    /// Sets whether validated ranking rejects duplicate cards.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhand::ClassifierOptions;
    ///
    /// let options = ClassifierOptions::default().with_reject_duplicates(true);
    /// assert_eq!(options.reject_duplicates, true);
    /// ```
    #[must_use]
    pub const fn with_reject_duplicates(mut self, reject: bool) -> Self {
        self.reject_duplicates = reject;
        self
    }
}
