use argh::FromArgs;
use std::path::{Path, PathBuf};

use binmorph::{
    image::{Image, ImageSize},
    imgproc::render,
    pipeline,
};

#[derive(FromArgs)]
/// Binarize an image and apply a morphological transform or a point-wise operation
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output png image (default: output.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"output.png\")")]
    output: PathBuf,

    /// transform: none, erode, dilate, open, close, gradient, boundary extraction,
    /// top hat, black hat (default: gradient)
    #[argh(option, short = 't', default = "String::from(\"gradient\")")]
    transform: String,

    /// structuring element level, values up to 3 use a 3x3 element
    #[argh(option, short = 'l')]
    level: Option<i64>,

    /// point-wise operation to run instead of the transform: equalize, flip, mirror,
    /// binarize, invert, solarize
    #[argh(option, short = 'p')]
    operation: Option<String>,

    /// run the point-wise operation on the gray scale image
    #[argh(switch, short = 'g')]
    gray: bool,

    /// rescale the transform output to the full range instead of clamping it
    #[argh(switch)]
    rescale: bool,
}

fn read_rgb(path: &Path) -> Result<Image<u8, 3>, Box<dyn std::error::Error>> {
    let decoded = image::open(path)?.into_rgb8();
    let size = ImageSize {
        width: decoded.width() as usize,
        height: decoded.height() as usize,
    };
    Ok(Image::new(size, decoded.into_raw())?)
}

fn write_png<const C: usize>(
    path: &Path,
    image: &Image<u8, C>,
) -> Result<(), Box<dyn std::error::Error>> {
    let color = match C {
        1 => image::ExtendedColorType::L8,
        _ => image::ExtendedColorType::Rgb8,
    };
    image::save_buffer_with_format(
        path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        color,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let rgb = read_rgb(&args.image_path)?;
    log::info!("read {} from {}", rgb.size(), args.image_path.display());

    match (args.operation.as_deref(), args.gray) {
        (Some(operation), true) => {
            let out = pipeline::apply_operation_gray(&rgb, operation)?;
            write_png(&args.output, &out)?;
        }
        (Some(operation), false) => {
            let out = pipeline::apply_operation(&rgb, operation)?;
            write_png(&args.output, &out)?;
        }
        (None, _) => {
            let out = pipeline::morph_rgb(&rgb, &args.transform, args.level)?;
            let out = if args.rescale {
                render::rescale_to_u8(&out)?
            } else {
                render::clamp_to_u8(&out)?
            };
            write_png(&args.output, &out)?;
        }
    }

    log::info!("wrote {}", args.output.display());

    Ok(())
}
