use std::collections::HashSet;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::{Args, Parser, Subcommand};
use kritrim::catalog;
use kritrim::generation::suggest::SuggestionField;
use kritrim::image::InlineImage;
use kritrim::jobs::JobStatus;
use kritrim::selection::{self, CulturalLook, FilterChoice, ImaginationInputs, QuickTrip, Selection, MAX_QUICK_ERAS};
use kritrim::{studio_from_config, Config};

#[derive(Parser, Debug)]
#[command(name = "kritrimctl", about = "CLI for the Kritrim generation core", version)]
struct Cli {
    /// Override GEMINI_API_BASE
    #[arg(global = true, long)]
    api_base: Option<String>,

    /// Override BATCH_CONCURRENCY
    #[arg(global = true, long)]
    concurrency: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate variants of a photo
    Generate {
        /// Source photo (png, jpeg, webp or gif)
        #[arg(long, value_name = "PATH")]
        image: PathBuf,
        /// Directory for generated images
        #[arg(long, value_name = "DIR", default_value = "out")]
        out: PathBuf,
        #[command(subcommand)]
        mode: Mode,
    },
    /// Print the prompts a selection would send, without generating
    Prompt {
        #[command(subcommand)]
        mode: Mode,
    },
    /// Ask the text model for an imagination field suggestion
    Suggest {
        /// One of scenery, attire, pose, hairStyle, eyeStyle
        field: String,
    },
    /// List built-in choices
    Catalog {
        #[command(subcommand)]
        cmd: CatalogCmd,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum Mode {
    /// Several eras at once
    Quick {
        /// Era name (repeatable, up to 6)
        #[arg(long = "era", value_name = "ERA")]
        eras: Vec<String>,
        /// Pick six random eras instead
        #[arg(long, conflicts_with = "eras")]
        random: bool,
    },
    /// Traditional attire of a country/region
    Cultural {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
    /// Free-form scene description
    Imagination(ImaginationArgs),
    /// Photographic filter
    Filter {
        /// Filter name, see `catalog filters`
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
struct ImaginationArgs {
    #[arg(long, default_value = "")]
    scenery: String,
    #[arg(long, default_value = "")]
    attire: String,
    #[arg(long, default_value = "")]
    pose: String,
    #[arg(long, default_value = "")]
    hair_style: String,
    #[arg(long, default_value = "")]
    eye_style: String,
    #[arg(long)]
    figure_size: Option<String>,
    /// Style (repeatable); joined into a comma separated list
    #[arg(long = "style")]
    styles: Vec<String>,
    #[arg(long)]
    aspect_ratio: Option<String>,
    #[arg(long)]
    image_framing: Option<String>,
}

#[derive(Subcommand, Debug)]
enum CatalogCmd {
    /// Era categories and their eras
    Eras,
    /// Countries and their traditional looks
    Cultural {
        /// Only list the looks of this country
        country: Option<String>,
    },
    /// Photographic filters
    Filters,
}

impl Mode {
    fn into_selection(self) -> Selection {
        match self {
            Mode::Quick { eras, random } => {
                let mut trip = QuickTrip { eras };
                if random {
                    trip.surprise_me();
                } else if let Ok(kept) = selection::quick_eras(&trip) {
                    let distinct = trip.eras.iter().map(|e| e.trim()).filter(|e| !e.is_empty()).collect::<HashSet<_>>().len();
                    if distinct > kept.len() {
                        eprintln!("Warning: only the first {} eras are used, dropped {}", MAX_QUICK_ERAS, distinct - kept.len());
                    }
                }
                Selection::Quick(trip)
            }
            Mode::Cultural { country, region } => {
                let mut look = CulturalLook::default();
                look.select_country(country);
                look.select_region(region);
                if look.theme_key().is_some() && !look.is_catalogued() {
                    eprintln!("Note: not a built-in look, see `catalog cultural`");
                }
                Selection::Cultural(look)
            }
            Mode::Imagination(args) => {
                let mut form = ImaginationInputs {
                    scenery: args.scenery,
                    attire: args.attire,
                    pose: args.pose,
                    hair_style: args.hair_style,
                    eye_style: args.eye_style,
                    ..ImaginationInputs::default()
                };
                if let Some(v) = args.figure_size { form.figure_size = v; }
                if let Some(v) = args.aspect_ratio { form.aspect_ratio = v; }
                if let Some(v) = args.image_framing { form.image_framing = v; }
                if !args.styles.is_empty() {
                    form.style = join_distinct(&args.styles);
                }
                Selection::Imagination(form)
            }
            Mode::Filter { name } => Selection::Filter(FilterChoice { name }),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let load_config = || -> Result<Config, Box<dyn std::error::Error>> {
        let mut conf = Config::new()?;
        if let Some(base) = cli.api_base.clone() {
            conf.gemini_api_base = base;
        }
        if let Some(n) = cli.concurrency {
            conf.batch_concurrency = n;
        }
        Ok(conf)
    };

    match cli.command {
        Commands::Generate { image, out, mode } => {
            let conf = load_config()?;
            let studio = studio_from_config(&conf);
            studio.upload(read_data_url(&image).await?).await?;

            let selection = mode.into_selection();
            let snapshot = match studio.generate(&selection).await {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(2);
                }
            };

            tokio::fs::create_dir_all(&out).await?;
            let mut failed = 0;
            let mut taken = HashSet::new();
            for (index, (key, job)) in snapshot.jobs.iter().enumerate() {
                match &job.status {
                    JobStatus::Done { image } => {
                        let path = write_image(&out, index, key, image, &mut taken).await?;
                        println!("done   {} -> {}", key, path.display());
                    }
                    JobStatus::Error { message } => {
                        failed += 1;
                        println!("error  {}: {}", key, message);
                    }
                    JobStatus::Pending => println!("pending {}", key),
                }
            }
            if failed > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Prompt { mode } => {
            let conf = load_config()?;
            let studio = studio_from_config(&conf);
            let selection = mode.into_selection();
            match studio.preview(&selection).await {
                Ok(planned) => {
                    for job in planned {
                        println!("[{}] (fallback context: {})\n{}\n", job.key, job.context, job.prompt);
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(2);
                }
            }
        }
        Commands::Suggest { field } => {
            let field: SuggestionField = field.parse()?;
            let conf = load_config()?;
            let studio = studio_from_config(&conf);
            match studio.suggest(field).await {
                Ok(s) => {
                    println!("{}", s);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Catalog { cmd } => {
            match cmd {
                CatalogCmd::Eras => {
                    for category in catalog::ERA_CATEGORIES {
                        println!("{}", category.name);
                        for era in category.eras {
                            println!("  {}", era);
                        }
                    }
                }
                CatalogCmd::Cultural { country } => match country {
                    Some(country) => match catalog::cultural_regions(&country) {
                        Some(regions) => regions.iter().for_each(|r| println!("{}", r)),
                        None => {
                            eprintln!("Error: no built-in looks for '{}'", country);
                            std::process::exit(2);
                        }
                    },
                    None => {
                        for country in catalog::CULTURAL_LOOKS {
                            println!("{}", country.name);
                            for region in country.regions {
                                println!("  {}", region);
                            }
                        }
                    }
                },
                CatalogCmd::Filters => {
                    for filter in catalog::FILTERS {
                        println!("{:<24}{}", filter.name, filter.description);
                    }
                }
            }
            Ok(())
        }
    }
}

async fn read_data_url(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        other => return Err(format!("Unsupported image extension '{}'", other).into()),
    };
    let bytes = tokio::fs::read(path).await?;
    Ok(InlineImage::new(mime, BASE64.encode(bytes)).to_data_url())
}

async fn write_image(
    dir: &Path,
    index: usize,
    key: &str,
    data_url: &str,
    taken: &mut HashSet<PathBuf>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let image = InlineImage::from_data_url(data_url)?;
    let ext = image.mime_type.trim_start_matches("image/");
    let ext = if ext == "jpeg" { "jpg" } else { ext };
    let path = output_path(dir, index, key, ext, taken);
    tokio::fs::write(&path, BASE64.decode(image.data.as_bytes())?).await?;
    Ok(path)
}

/// File name for a job result: a slug of the key, `image-<n>` when nothing of the key
/// survives, with a numeric suffix if an earlier job already claimed the name.
fn output_path(dir: &Path, index: usize, key: &str, ext: &str, taken: &mut HashSet<PathBuf>) -> PathBuf {
    let slug = slugify(key);
    let stem = if slug.is_empty() { format!("image-{}", index + 1) } else { slug };
    let mut path = dir.join(format!("{}.{}", stem, ext));
    let mut n = 2;
    while !taken.insert(path.clone()) {
        path = dir.join(format!("{}-{}.{}", stem, n, ext));
        n += 1;
    }
    path
}

fn slugify(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn join_distinct(values: &[String]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for v in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick(eras: &[&str]) -> Mode {
        Mode::Quick { eras: eras.iter().map(|e| e.to_string()).collect(), random: false }
    }

    #[test]
    fn repeated_era_flags_do_not_cancel_out() {
        let Selection::Quick(trip) = quick(&["Viking Warrior", "Viking Warrior"]).into_selection() else {
            panic!("expected a quick trip");
        };
        assert_eq!(selection::quick_eras(&trip).unwrap(), vec!["Viking Warrior".to_string()]);
    }

    #[test]
    fn seventh_era_is_dropped_by_normalisation() {
        let eras: Vec<&str> = catalog::all_eras().into_iter().take(MAX_QUICK_ERAS + 1).collect();
        let Selection::Quick(trip) = quick(&eras).into_selection() else {
            panic!("expected a quick trip");
        };
        let kept = selection::quick_eras(&trip).unwrap();
        assert_eq!(kept.len(), MAX_QUICK_ERAS);
        assert_eq!(kept[0], eras[0]);
    }

    #[test]
    fn repeated_style_flags_are_kept_once() {
        assert_eq!(
            join_distinct(&["Cinematic".to_string(), "Watercolor".to_string(), "Cinematic".to_string()]),
            "Cinematic, Watercolor"
        );
    }

    #[test]
    fn keys_without_ascii_fall_back_to_index() {
        let mut taken = HashSet::new();
        let path = output_path(Path::new("out"), 2, "Ὠραία, Ελλάδα", "png", &mut taken);
        assert_eq!(path, Path::new("out").join("image-3.png"));
    }

    #[test]
    fn colliding_slugs_get_distinct_paths() {
        let mut taken = HashSet::new();
        let dir = Path::new("out");
        let a = output_path(dir, 0, "Kente cloth, Ghana", "png", &mut taken);
        let b = output_path(dir, 1, "Kente Cloth - Ghana", "png", &mut taken);
        let c = output_path(dir, 2, "kente cloth ghana", "png", &mut taken);
        assert_eq!(a, dir.join("kente-cloth-ghana.png"));
        assert_eq!(b, dir.join("kente-cloth-ghana-2.png"));
        assert_eq!(c, dir.join("kente-cloth-ghana-3.png"));
    }
}
