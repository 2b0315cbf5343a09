//! Binary image morphology: binarization, erosion, dilation and the transforms
//! derived from them, plus the point-wise operations around them.
//!
//! ```
//! use binmorph::image::{Image, ImageSize};
//! use binmorph::pipeline;
//!
//! let rgb = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 200).unwrap();
//!
//! let gradient = pipeline::morph_rgb(&rgb, "gradient", None).unwrap();
//! assert_eq!(gradient.size(), rgb.size());
//! ```

#[doc(inline)]
pub use binmorph_image as image;

#[doc(inline)]
pub use binmorph_imgproc as imgproc;

/// From decoded images to transform results.
pub mod pipeline;
