use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use serde_json::Value;
use youtu::{config, reply, IdCardSide, ImageSource, LicenseKind, YoutuClient};

#[derive(Parser)]
#[command(name = "youtu")]
#[command(
    version,
    about = "Command line client for the Youtu face recognition and image analysis API"
)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log requests
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ImageArg {
    /// Local image path, or a url with --url
    image: String,
    /// Treat the image argument as a url
    #[arg(long)]
    url: bool,
}

impl ImageArg {
    fn source(&self) -> ImageSource {
        ImageSource::from_arg(&self.image, self.url)
    }
}

#[derive(Args)]
struct ClassifyArg {
    #[command(flatten)]
    image: ImageArg,
    /// Opaque value echoed back by the service
    #[arg(long, default_value = "")]
    cookie: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect faces and attributes
    DetectFace {
        #[command(flatten)]
        image: ImageArg,
        /// Only return the largest face
        #[arg(long)]
        big_face: bool,
    },
    /// Locate facial landmarks
    FaceShape {
        #[command(flatten)]
        image: ImageArg,
        #[arg(long)]
        big_face: bool,
    },
    /// Compare the faces in two images
    FaceCompare {
        image_a: String,
        image_b: String,
        #[arg(long)]
        url: bool,
    },
    /// Verify a face against a person
    FaceVerify {
        person_id: String,
        #[command(flatten)]
        image: ImageArg,
    },
    /// Identify a face within a group
    FaceIdentify {
        group_id: String,
        #[command(flatten)]
        image: ImageArg,
    },
    /// Identify every face in an image
    MultiFaceIdentify {
        #[command(flatten)]
        image: ImageArg,
        #[arg(long, default_value = "")]
        group_id: String,
        /// Comma separated group ids
        #[arg(long, value_delimiter = ',')]
        group_ids: Vec<String>,
        #[arg(long, default_value_t = youtu::api::DEFAULT_TOPN)]
        topn: u32,
        #[arg(long, default_value_t = youtu::api::DEFAULT_MIN_SIZE)]
        min_size: u32,
    },
    /// Create a person from a face image
    NewPerson {
        person_id: String,
        person_name: String,
        #[command(flatten)]
        image: ImageArg,
        /// Comma separated group ids
        #[arg(long, value_delimiter = ',', required = true)]
        group_ids: Vec<String>,
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Delete a person
    DelPerson { person_id: String },
    /// Add face images to a person
    AddFace {
        person_id: String,
        #[arg(required = true)]
        images: Vec<String>,
        #[arg(long)]
        url: bool,
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Remove faces from a person
    DelFace {
        person_id: String,
        #[arg(required = true)]
        face_ids: Vec<String>,
    },
    /// Update a person's name and tag
    SetInfo {
        person_id: String,
        person_name: String,
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Show a person
    GetInfo { person_id: String },
    /// List groups
    GetGroupIds,
    /// List the persons in a group
    GetPersonIds { group_id: String },
    /// List the faces of a person
    GetFaceIds { person_id: String },
    /// Show a face
    GetFaceInfo { face_id: String },
    /// Blur detection
    FuzzyDetect(ClassifyArg),
    /// Food detection
    FoodDetect(ClassifyArg),
    /// Image tagging
    ImageTag(ClassifyArg),
    /// Pornography classifier
    ImagePorn(ClassifyArg),
    /// Terrorism classifier
    ImageTerrorism(ClassifyArg),
    /// Vehicle attributes
    CarClassify(ClassifyArg),
    /// Id card OCR
    IdcardOcr {
        #[command(flatten)]
        image: ImageArg,
        /// Image shows the back of the card
        #[arg(long)]
        back: bool,
    },
    /// General text OCR
    GeneralOcr(ImageArg),
    /// Business card OCR
    BcOcr(ImageArg),
    /// Vehicle or driver's license OCR
    DriverLicenseOcr {
        #[command(flatten)]
        image: ImageArg,
        /// Image is a driver's license rather than a vehicle registration
        #[arg(long)]
        driver: bool,
    },
    /// Credit card OCR
    CreditCardOcr(ImageArg),
    /// Business license OCR
    BizLicenseOcr(ImageArg),
    /// License plate OCR
    PlateOcr(ImageArg),
    /// Fetch a lip-reading challenge
    LiveGetFour,
    /// Liveness check on a video
    LiveDetectFour {
        video: PathBuf,
        validate_data: String,
        /// Photo to compare the video against
        #[arg(long)]
        card: Option<PathBuf>,
    },
    /// Liveness check against an id card
    IdcardLiveDetectFour {
        video: PathBuf,
        validate_data: String,
        idcard_number: String,
        idcard_name: String,
    },
    /// Compare a face with an id card photo
    IdcardFaceCompare {
        idcard_number: String,
        idcard_name: String,
        #[command(flatten)]
        image: ImageArg,
    },
    /// Check an id number against a name
    ValidateIdcard {
        idcard_number: String,
        idcard_name: String,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a template config file
    Init,
    /// Print the effective config with secrets masked
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .format_timestamp(None)
        .init();

    let mut cfg = config::load_config(cli.config.as_deref())?;
    cfg.apply_env()?;

    let command = match cli.command {
        Commands::Config { action } => {
            return match action {
                ConfigAction::Init => init_config(cli.config.as_deref()),
                ConfigAction::Show => {
                    print!("{}", toml::to_string_pretty(&cfg.masked())?);
                    Ok(())
                }
            };
        }
        command => command,
    };

    let client = YoutuClient::from_config(&cfg).context("Failed to create client")?;
    let rsp = run(&client, command)?;

    println!("{}", serde_json::to_string_pretty(&rsp)?);
    if !reply::is_ok(&rsp) {
        warn!(
            "Service returned error {}: {}",
            reply::error_code(&rsp).unwrap_or_default(),
            reply::error_message(&rsp).unwrap_or_default()
        );
    }
    Ok(())
}

fn run(client: &YoutuClient, command: Commands) -> Result<Value> {
    let rsp = match command {
        Commands::DetectFace { image, big_face } => client.detect_face(&image.source(), big_face),
        Commands::FaceShape { image, big_face } => client.face_shape(&image.source(), big_face),
        Commands::FaceCompare {
            image_a,
            image_b,
            url,
        } => client.face_compare(
            &ImageSource::from_arg(&image_a, url),
            &ImageSource::from_arg(&image_b, url),
        ),
        Commands::FaceVerify { person_id, image } => {
            client.face_verify(&person_id, &image.source())
        }
        Commands::FaceIdentify { group_id, image } => {
            client.face_identify(&group_id, &image.source())
        }
        Commands::MultiFaceIdentify {
            image,
            group_id,
            group_ids,
            topn,
            min_size,
        } => client.multi_face_identify(&group_id, &group_ids, &image.source(), topn, min_size),
        Commands::NewPerson {
            person_id,
            person_name,
            image,
            group_ids,
            tag,
        } => client.new_person(&person_id, &person_name, &group_ids, &image.source(), &tag),
        Commands::DelPerson { person_id } => client.del_person(&person_id),
        Commands::AddFace {
            person_id,
            images,
            url,
            tag,
        } => {
            let sources: Vec<_> = images
                .iter()
                .map(|i| ImageSource::from_arg(i, url))
                .collect();
            client.add_face(&person_id, &sources, &tag)
        }
        Commands::DelFace {
            person_id,
            face_ids,
        } => client.del_face(&person_id, &face_ids),
        Commands::SetInfo {
            person_id,
            person_name,
            tag,
        } => client.set_info(&person_id, &person_name, &tag),
        Commands::GetInfo { person_id } => client.get_info(&person_id),
        Commands::GetGroupIds => client.get_group_ids(),
        Commands::GetPersonIds { group_id } => client.get_person_ids(&group_id),
        Commands::GetFaceIds { person_id } => client.get_face_ids(&person_id),
        Commands::GetFaceInfo { face_id } => client.get_face_info(&face_id),
        Commands::FuzzyDetect(a) => client.fuzzy_detect(&a.image.source(), &a.cookie),
        Commands::FoodDetect(a) => client.food_detect(&a.image.source(), &a.cookie),
        Commands::ImageTag(a) => client.image_tag(&a.image.source(), &a.cookie),
        Commands::ImagePorn(a) => client.image_porn(&a.image.source(), &a.cookie),
        Commands::ImageTerrorism(a) => client.image_terrorism(&a.image.source(), &a.cookie),
        Commands::CarClassify(a) => client.car_classify(&a.image.source(), &a.cookie),
        Commands::IdcardOcr { image, back } => {
            let side = if back { IdCardSide::Back } else { IdCardSide::Front };
            client.idcard_ocr(&image.source(), side)
        }
        Commands::GeneralOcr(image) => client.general_ocr(&image.source()),
        Commands::BcOcr(image) => client.bc_ocr(&image.source()),
        Commands::DriverLicenseOcr { image, driver } => {
            let kind = if driver {
                LicenseKind::Driver
            } else {
                LicenseKind::Vehicle
            };
            client.driver_license_ocr(&image.source(), kind)
        }
        Commands::CreditCardOcr(image) => client.credit_card_ocr(&image.source()),
        Commands::BizLicenseOcr(image) => client.biz_license_ocr(&image.source()),
        Commands::PlateOcr(image) => client.plate_ocr(&image.source()),
        Commands::LiveGetFour => client.live_get_four(),
        Commands::LiveDetectFour {
            video,
            validate_data,
            card,
        } => {
            let card = card.map(ImageSource::Path);
            client.live_detect_four(&video, &validate_data, card.as_ref())
        }
        Commands::IdcardLiveDetectFour {
            video,
            validate_data,
            idcard_number,
            idcard_name,
        } => client.idcard_live_detect_four(&video, &validate_data, &idcard_number, &idcard_name),
        Commands::IdcardFaceCompare {
            idcard_number,
            idcard_name,
            image,
        } => client.idcard_face_compare(&idcard_number, &idcard_name, &image.source()),
        Commands::ValidateIdcard {
            idcard_number,
            idcard_name,
        } => client.validate_idcard(&idcard_number, &idcard_name),
        Commands::Config { .. } => anyhow::bail!("config is not a remote operation"),
    };
    rsp.context("Request failed")
}

fn init_config(path: Option<&std::path::Path>) -> Result<()> {
    let path = path.unwrap_or(&config::CONFIG_PATH);
    if path.exists() {
        anyhow::bail!("Config already exists at {}", path.display());
    }

    config::save_config(&config::Config::default(), Some(path))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("✓ Wrote config template to {}", path.display());
    info!("Fill in app_id, secret_id, secret_key and user_id");
    Ok(())
}
