use argh::FromArgs;
use imgwarp::{
    image::{Image, ImageSize},
    imgproc::{inspect, transform},
};

#[derive(FromArgs)]
/// Apply a geometric transform to a synthetic gradient image.
struct Args {
    /// operation to run: inspect, rotate, scale or translate
    #[argh(option, default = "String::from(\"rotate\")")]
    op: String,

    /// width of the generated image
    #[argh(option, default = "64")]
    width: usize,

    /// height of the generated image
    #[argh(option, default = "48")]
    height: usize,

    /// rotation angle in degrees
    #[argh(option, default = "30.0")]
    angle: f32,

    /// uniform scale factor
    #[argh(option, default = "1.5")]
    scale: f32,

    /// translation offset applied to both axes
    #[argh(option, default = "8.0")]
    offset: f32,
}

fn gradient(size: ImageSize) -> Result<Image<u8, 1>, Box<dyn std::error::Error>> {
    let data = (0..size.height)
        .flat_map(|y| (0..size.width).map(move |x| ((x + y) % 256) as u8))
        .collect();
    Ok(Image::new(size, data)?)
}

fn summarize(label: &str, image: &Image<u8, 1>) -> Result<(), Box<dyn std::error::Error>> {
    let (mut zeros, mut sum) = (0usize, 0u64);
    inspect::inspect_intensities(image, |_, value| {
        if value == 0 {
            zeros += 1;
        }
        sum += value as u64;
    })?;

    let pixels = image.width() * image.height();
    println!(
        "{label}: {} mean={:.2} zero-filled={zeros}/{pixels}",
        image.size(),
        sum as f64 / pixels as f64,
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = gradient(ImageSize {
        width: args.width,
        height: args.height,
    })?;
    log::info!("generated gradient image {}", image.size());

    summarize("input", &image)?;

    let output = match args.op.as_str() {
        "inspect" => return Ok(()),
        "rotate" => transform::rotate(&image, args.angle)?,
        "scale" => transform::scale(&image, args.scale)?,
        "translate" => transform::translate(&image, args.offset)?,
        other => return Err(format!("unknown operation: {other}").into()),
    };

    summarize(&args.op, &output)?;

    Ok(())
}
