use super::MorphologyError;
use crate::parallel::ExecutionStrategy;
use crate::threshold::MAX_PIXEL;

/// The level used when none is requested, and the smallest level the engine accepts.
pub const DEFAULT_LEVEL: usize = 3;

/// Resolve a requested level to the level used by the engine.
///
/// An absent level or any level less than or equal to [`DEFAULT_LEVEL`] becomes
/// [`DEFAULT_LEVEL`]; larger levels are kept as they are.
///
/// # Example
///
/// ```
/// use binmorph_imgproc::morphology::clamp_level;
///
/// assert_eq!(clamp_level(None), 3);
/// assert_eq!(clamp_level(Some(-4)), 3);
/// assert_eq!(clamp_level(Some(2)), 3);
/// assert_eq!(clamp_level(Some(7)), 7);
/// ```
pub fn clamp_level(level: Option<i64>) -> usize {
    match level {
        Some(level) if level > DEFAULT_LEVEL as i64 => {
            usize::try_from(level).unwrap_or(usize::MAX)
        }
        _ => DEFAULT_LEVEL,
    }
}

/// A square structuring element whose cells are all foreground.
///
/// The element is fully determined by its `level`: it has `level x level` cells,
/// every cell equals [`MAX_PIXEL`], and images are zero padded by `level - 2`
/// pixels before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuringElement {
    level: usize,
}

impl StructuringElement {
    /// Create a structuring element of `level x level` cells.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidLevel`] if `level < 2`, the padding width
    /// `level - 2` is not defined in that case.
    pub fn new(level: usize) -> Result<Self, MorphologyError> {
        if level < 2 {
            return Err(MorphologyError::InvalidLevel(level));
        }
        Ok(Self { level })
    }

    /// The side length of the element.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The (height, width) of the element.
    pub fn size(&self) -> (usize, usize) {
        (self.level, self.level)
    }

    /// The value of every cell.
    pub fn value(&self) -> u8 {
        MAX_PIXEL
    }

    /// The border width added around an image before scanning.
    pub fn pad(&self) -> usize {
        self.level - 2
    }

    /// The cells of the element in row-major order.
    pub fn data(&self) -> Vec<u8> {
        vec![self.value(); self.level * self.level]
    }
}

/// Configuration of the morphology engine.
///
/// A small value type holding the structuring element and the way the windowed scan
/// is scheduled. It carries no other state and can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Morphology {
    kernel: StructuringElement,
    strategy: ExecutionStrategy,
}

impl Morphology {
    /// Create an engine from a requested level, see [`clamp_level`].
    ///
    /// # Example
    ///
    /// ```
    /// use binmorph_imgproc::morphology::Morphology;
    ///
    /// assert_eq!(Morphology::new(None).level(), 3);
    /// assert_eq!(Morphology::new(Some(2)), Morphology::new(None));
    /// assert_eq!(Morphology::new(Some(5)).kernel().pad(), 3);
    /// ```
    pub fn new(level: Option<i64>) -> Self {
        let level = clamp_level(level);
        log::debug!("morphology level resolved to {level}");
        Self {
            kernel: StructuringElement { level },
            strategy: ExecutionStrategy::default(),
        }
    }

    /// Create an engine with exactly the given level, bypassing the clamp.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidLevel`] if `level < 2`.
    pub fn with_exact_level(level: usize) -> Result<Self, MorphologyError> {
        Ok(Self {
            kernel: StructuringElement::new(level)?,
            strategy: ExecutionStrategy::default(),
        })
    }

    /// Set the execution strategy of the windowed scan.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The level of the structuring element.
    pub fn level(&self) -> usize {
        self.kernel.level()
    }

    /// The structuring element.
    pub fn kernel(&self) -> &StructuringElement {
        &self.kernel
    }

    /// The execution strategy of the windowed scan.
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }
}

impl Default for Morphology {
    fn default() -> Self {
        Self::new(None)
    }
}
