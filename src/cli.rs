use clap::Parser;

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor, IsTerminal, Read, Write};
use std::{path::Path, sync::mpsc::channel, time::Duration};
use tempfile::NamedTempFile;

use crate::errors::{Error, Result};
use crate::geometry::{Point, Size};
use crate::logging::init_logging;
use crate::path::{ArcMode, ParseOptions, SmoothCurves, UnknownCommands};
use crate::region::RegionMap;
use crate::{render_stream, OutputFormat, RenderConfig};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// JSON map file to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,

    /// Log details of skipped path data and other diagnostics
    #[arg(long)]
    debug: bool,

    /// Canvas width
    #[arg(long, default_value = "959")]
    width: f64,

    /// Canvas height
    #[arg(long, default_value = "593")]
    height: f64,

    /// Space kept clear around the map
    #[arg(long, default_value = "12")]
    padding: f64,

    /// Zoom factor (clamped to 0.5..=5)
    #[arg(long, default_value = "1.0")]
    zoom: f64,

    /// Offset of the map centre from the canvas centre, as 'dx,dy'
    #[arg(long, allow_hyphen_values = true)]
    pan: Option<String>,

    /// Region code to draw as selected
    #[arg(long)]
    select: Option<String>,

    /// Print the code of the region under canvas point 'x,y' instead of rendering
    #[arg(long, allow_hyphen_values = true, conflicts_with = "watch")]
    hit: Option<String>,

    /// Output format
    #[arg(long, default_value = "svg")]
    format: OutputFormat,

    /// How arc commands are drawn
    #[arg(long, default_value = "line")]
    arc_mode: ArcMode,

    /// Only reflect the previous control point for 'S' after a cubic curve
    #[arg(long)]
    strict_smooth: bool,

    /// Also skip numbers following an unsupported path command
    #[arg(long)]
    skip_unknown_operands: bool,
}

/// Top-level configuration used by the `wanderstate` command-line process.
///
/// This is typically derived from command line arguments and passed to `run()`.
///
/// 'front-end' program settings (e.g. input/output filenames, whether to continually
/// process input on change, etc) are stored directly in this struct. Per-render
/// ('back-end') settings are stored in the embedded `RenderConfig` struct.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Stay monitoring `input_path` for changes (Requires input_path is not stdin)
    pub watch: bool,
    /// Verbose logging
    pub debug: bool,
    /// Canvas point to hit-test rather than rendering
    pub hit: Option<Point>,
    pub format: OutputFormat,
    /// render config options
    pub render: RenderConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == "-" {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.file != "-" && args.output != "-" {
            // Arguably creating this struct shouldn't do any IO, but this is a
            // deliberate UX safety restriction on the CLI which is worth keeping
            // as high-level as possible to keep the lower level API cleaner.
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        let offset = match args.pan {
            Some(pan) => pan
                .parse::<Point>()
                .map_err(|_| Error::Cli(format!("Invalid --pan value '{pan}' (expected dx,dy)")))?,
            None => Point::ORIGIN,
        };
        let hit = args
            .hit
            .map(|hit| {
                hit.parse::<Point>()
                    .map_err(|_| Error::Cli(format!("Invalid --hit value '{hit}' (expected x,y)")))
            })
            .transpose()?;
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            debug: args.debug,
            hit,
            format: args.format,
            render: RenderConfig {
                canvas: Size::new(args.width, args.height),
                padding: args.padding,
                zoom: args.zoom,
                offset,
                selected: args.select,
                parse: ParseOptions {
                    arc_mode: args.arc_mode,
                    smooth_curves: if args.strict_smooth {
                        SmoothCurves::Strict
                    } else {
                        SmoothCurves::Reflect
                    },
                    unknown_commands: if args.skip_unknown_operands {
                        UnknownCommands::SkipOperands
                    } else {
                        UnknownCommands::Skip
                    },
                },
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

fn open_input(input: &str) -> Result<Box<dyn BufRead>> {
    if input == "-" {
        let mut stdin = std::io::stdin().lock();
        if stdin.is_terminal() {
            // Read everything up-front so a single Ctrl-D ends input.
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf)?;
            Ok(Box::new(BufReader::new(Cursor::new(buf))))
        } else {
            Ok(Box::new(stdin))
        }
    } else {
        Ok(Box::new(BufReader::new(File::open(input)?)))
    }
}

/// Read a map from `input` ('-' for stdin), render it, and write the
/// result to `output` ('-' for stdout).
pub fn render_file(
    input: &str,
    output: &str,
    cfg: &RenderConfig,
    format: OutputFormat,
) -> Result<()> {
    let mut in_reader = open_input(input)?;

    if output == "-" {
        render_stream(&mut in_reader, &mut std::io::stdout(), cfg, format)?;
    } else {
        let mut out_temp = NamedTempFile::new()?;
        render_stream(&mut in_reader, &mut out_temp, cfg, format)?;
        // Copy content rather than rename (by .persist()) since this
        // could cross filesystems; some apps (e.g. eog) also fail to
        // react to 'moved-over' files.
        fs::copy(out_temp.path(), output)?;
    }
    tracing::info!("rendered {input} to {output}");

    Ok(())
}

/// Find which region of the map in `input` lies under canvas point `p`.
///
/// Returns the region code, or `None` for empty map.
pub fn hit_file(input: &str, p: Point, cfg: &RenderConfig) -> Result<Option<String>> {
    let mut text = String::new();
    open_input(input)?.read_to_string(&mut text)?;
    let map = RegionMap::from_json(&text)?;
    let Some(location) = cfg.layout().locate(map.view_box, p) else {
        return Err(Error::Cli("Map has no visible area on this canvas".into()));
    };
    tracing::debug!("canvas point {p} is view-box point {location}");
    Ok(map
        .hit_test(location, &cfg.parse)
        .map(|region| region.code.clone()))
}

/// Run the `wanderstate` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    init_logging(config.debug);

    if let Some(p) = config.hit {
        let code = hit_file(&config.input_path, p, &config.render)?;
        let mut out = std::io::stdout();
        writeln!(out, "{}", code.as_deref().unwrap_or("-"))?;
        return Ok(());
    }

    if !config.watch {
        render_file(
            &config.input_path,
            &config.output_path,
            &config.render,
            config.format,
        )?;
    } else if config.input_path != "-" {
        let watch = config.input_path;
        let (tx, rx) = channel();
        let mut watcher = new_debouncer(Duration::from_millis(250), tx).map_err(Error::from_err)?;
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(Path::new(&watch), RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        render_file(&watch, &config.output_path, &config.render, config.format)
            .unwrap_or_else(|e| {
                tracing::error!("render failed: {e}");
            });
        tracing::info!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize()? == watch_path.canonicalize()? {
                            tracing::info!("{} changed", event.path.to_string_lossy());
                            render_file(
                                &watch,
                                &config.output_path,
                                &config.render,
                                config.format,
                            )
                            .unwrap_or_else(|e| {
                                tracing::error!("render failed: {e}");
                            });
                        }
                    }
                }
                Ok(Err(e)) => tracing::warn!("Watch error {e:?}"),
                Err(e) => tracing::warn!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}
