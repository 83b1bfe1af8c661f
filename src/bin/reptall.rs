use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use reptall::{
    CameraSample, CameraSource, Channel, FrameIndex, FrameInputs, NeverAbort, NoCamera, OutputFrame,
    ParamSnapshot, PixelDepth, PixelImage, RenderStatus, SourceFrame, render::image_io,
};

#[derive(Parser, Debug)]
#[command(name = "reptall", version)]
struct Cli {
    /// Log at debug level instead of warn.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of repeated copies as a PNG.
    Render(RenderArgs),
    /// List the effect parameters with their defaults and slider ranges.
    Params,
    /// Print the effect name, version and description.
    About,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Source image (any format the `image` crate decodes).
    #[arg(long)]
    source: PathBuf,

    /// Job JSON with parameter overrides, camera and pixel depth.
    #[arg(long)]
    job: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Pixel depth to render at; overrides the job file.
    #[arg(long, value_enum)]
    depth: Option<DepthChoice>,

    /// Frame index passed to the camera provider; overrides the job file.
    #[arg(long)]
    frame: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DepthChoice {
    U8,
    U16,
    F32,
}

impl From<DepthChoice> for PixelDepth {
    fn from(d: DepthChoice) -> Self {
        match d {
            DepthChoice::U8 => PixelDepth::U8,
            DepthChoice::U16 => PixelDepth::U16,
            DepthChoice::F32 => PixelDepth::F32,
        }
    }
}

/// On-disk render job. Every field is optional.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Job {
    params: BTreeMap<String, f64>,
    camera: Option<CameraSample>,
    depth: PixelDepth,
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Params => cmd_params(),
        Command::About => {
            println!("{}", reptall::about_text());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_job(path: &Path) -> anyhow::Result<Job> {
    let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
    let job: Job = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse job JSON '{}'", path.display()))?;
    Ok(job)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut job = match &args.job {
        Some(path) => read_job(path)?,
        None => Job::default(),
    };
    if let Some(d) = args.depth {
        job.depth = d.into();
    }
    if let Some(f) = args.frame {
        job.frame = f;
    }

    let mut params = ParamSnapshot::defaults();
    params
        .apply_named(job.params.iter().map(|(k, v)| (k, *v)))
        .context("apply job parameters")?;

    let source = image::open(&args.source)
        .with_context(|| format!("open source image '{}'", args.source.display()))?;

    let status = match job.depth {
        PixelDepth::U8 => {
            let out = render_at::<u8>(&source, &params, &job)?;
            save_png(&args.out, image::DynamicImage::ImageRgba8(image_io::to_rgba8(&out.0)))?;
            out.1
        }
        PixelDepth::U16 => {
            let out = render_at::<u16>(&source, &params, &job)?;
            save_png(&args.out, image::DynamicImage::ImageRgba16(image_io::to_rgba16(&out.0)))?;
            out.1
        }
        PixelDepth::F32 => {
            let out = render_at::<f32>(&source, &params, &job)?;
            save_png(&args.out, image::DynamicImage::ImageRgba16(image_io::to_rgba16(&out.0)))?;
            out.1
        }
    };

    if status == RenderStatus::Cancelled {
        eprintln!("render was cancelled; output is partial");
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn render_at<C>(
    source: &image::DynamicImage,
    params: &ParamSnapshot,
    job: &Job,
) -> anyhow::Result<(PixelImage<C>, RenderStatus)>
where
    C: Channel,
    for<'a> SourceFrame<'a>: From<reptall::Surface<'a, C>>,
    for<'a> OutputFrame<'a>: From<reptall::SurfaceMut<'a, C>>,
{
    let src: PixelImage<C> = image_io::premultiplied_from_dynamic(source);
    let mut dst = PixelImage::<C>::new(src.width, src.height);

    let mut fixed = job.camera;
    let mut no_camera = NoCamera;
    let camera: &mut dyn CameraSource = match fixed.as_mut() {
        Some(c) => c,
        None => &mut no_camera,
    };
    let mut abort = NeverAbort;
    let inputs = FrameInputs {
        params,
        frame: FrameIndex(job.frame),
        camera,
        abort: &mut abort,
    };

    let outcome = reptall::render_frame(inputs, src.view().into(), dst.view_mut().into())?;
    tracing::info!(
        copies = outcome.copies_total,
        drawn = outcome.copies_drawn,
        camera = outcome.camera_used,
        "rendered"
    );
    Ok((dst, outcome.status))
}

fn save_png(path: &Path, img: image::DynamicImage) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_params() -> anyhow::Result<()> {
    println!("{:<18} {:<15} {:>9} {:>16}", "name", "label", "default", "slider");
    for spec in reptall::registry() {
        println!(
            "{:<18} {:<15} {:>9} {:>16}",
            spec.name,
            spec.id.label(),
            spec.default,
            format!("[{}, {}]", spec.slider_min, spec.slider_max)
        );
    }
    Ok(())
}
