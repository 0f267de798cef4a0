use serde::{Deserialize, Serialize};

pub const YOUTU_HOST: &str = "https://api.youtu.qq.com/";
pub const FACE_IN_HOST: &str = "https://faceinapi.youtu.qq.com/";

/// Service host a client talks to.
///
/// In config files this is a plain string: `"youtu"`, `"face_in"` or a base URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Domain {
    #[default]
    Youtu,
    FaceIn,
    /// Any other base URL, e.g. a private deployment or a local mock
    Custom(String),
}

impl Domain {
    /// Base URL, always ending in `/`
    pub fn base_url(&self) -> String {
        match self {
            Domain::Youtu => YOUTU_HOST.to_string(),
            Domain::FaceIn => FACE_IN_HOST.to_string(),
            Domain::Custom(url) if url.ends_with('/') => url.clone(),
            Domain::Custom(url) => format!("{url}/"),
        }
    }
}

impl std::str::FromStr for Domain {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Domain::from(s.to_string()))
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Youtu => f.write_str("youtu"),
            Domain::FaceIn => f.write_str("face_in"),
            Domain::Custom(url) => f.write_str(url),
        }
    }
}

impl From<String> for Domain {
    fn from(s: String) -> Self {
        match s.as_str() {
            "youtu" => Domain::Youtu,
            "face_in" | "face-in" => Domain::FaceIn,
            _ => Domain::Custom(s),
        }
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.to_string()
    }
}

// Face
pub const DETECT_FACE: &str = "youtu/api/detectface";
pub const FACE_SHAPE: &str = "youtu/api/faceshape";
pub const FACE_COMPARE: &str = "youtu/api/facecompare";
pub const FACE_VERIFY: &str = "youtu/api/faceverify";
pub const FACE_IDENTIFY: &str = "youtu/api/faceidentify";
pub const MULTI_FACE_IDENTIFY: &str = "youtu/api/multifaceidentify";

// Person and group management
pub const NEW_PERSON: &str = "youtu/api/newperson";
pub const DEL_PERSON: &str = "youtu/api/delperson";
pub const ADD_FACE: &str = "youtu/api/addface";
pub const DEL_FACE: &str = "youtu/api/delface";
pub const SET_INFO: &str = "youtu/api/setinfo";
pub const GET_INFO: &str = "youtu/api/getinfo";
pub const GET_GROUP_IDS: &str = "youtu/api/getgroupids";
pub const GET_PERSON_IDS: &str = "youtu/api/getpersonids";
pub const GET_FACE_IDS: &str = "youtu/api/getfaceids";
pub const GET_FACE_INFO: &str = "youtu/api/getfaceinfo";

// Image classifiers
pub const FUZZY_DETECT: &str = "youtu/imageapi/fuzzydetect";
pub const FOOD_DETECT: &str = "youtu/imageapi/fooddetect";
pub const IMAGE_TAG: &str = "youtu/imageapi/imagetag";
pub const IMAGE_PORN: &str = "youtu/imageapi/imageporn";
pub const IMAGE_TERRORISM: &str = "youtu/imageapi/imageterrorism";
pub const CAR_CLASSIFY: &str = "youtu/carapi/carclassify";

// OCR
pub const IDCARD_OCR: &str = "youtu/ocrapi/idcardocr";
pub const GENERAL_OCR: &str = "youtu/ocrapi/generalocr";
pub const BC_OCR: &str = "youtu/ocrapi/bcocr";
pub const DRIVER_LICENSE_OCR: &str = "youtu/ocrapi/driverlicenseocr";
pub const CREDIT_CARD_OCR: &str = "youtu/ocrapi/creditcardocr";
pub const BIZ_LICENSE_OCR: &str = "youtu/ocrapi/bizlicenseocr";
pub const PLATE_OCR: &str = "youtu/ocrapi/plateocr";

// Liveness
pub const LIVE_GET_FOUR: &str = "openliveapi/livegetfour";
pub const LIVE_DETECT_FOUR: &str = "openliveapi/livedetectfour";
pub const IDCARD_LIVE_DETECT_FOUR: &str = "openliveapi/idcardlivedetectfour";
pub const IDCARD_FACE_COMPARE: &str = "openliveapi/idcardfacecompare";
pub const VALIDATE_IDCARD: &str = "openliveapi/validateidcard";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_trailing_slash() {
        assert_eq!(Domain::Youtu.base_url(), "https://api.youtu.qq.com/");
        assert_eq!(
            Domain::Custom("http://127.0.0.1:1234".into()).base_url(),
            "http://127.0.0.1:1234/"
        );
        assert_eq!(
            Domain::Custom("http://127.0.0.1:1234/".into()).base_url(),
            "http://127.0.0.1:1234/"
        );
    }

    #[test]
    fn test_parse_domain() {
        assert_eq!("youtu".parse::<Domain>().unwrap(), Domain::Youtu);
        assert_eq!("face-in".parse::<Domain>().unwrap(), Domain::FaceIn);
        assert_eq!(
            "https://example.test".parse::<Domain>().unwrap(),
            Domain::Custom("https://example.test".into())
        );
    }

    #[test]
    fn test_domain_toml_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            domain: Domain,
        }
        let w: Wrap = toml::from_str("domain = \"face_in\"").unwrap();
        assert_eq!(w.domain, Domain::FaceIn);
        let w: Wrap = toml::from_str("domain = \"http://x\"").unwrap();
        assert_eq!(w.domain, Domain::Custom("http://x".into()));
    }

    #[test]
    fn test_custom_domain_written_as_plain_string() {
        #[derive(Serialize, Deserialize)]
        struct Wrap {
            domain: Domain,
        }
        let w = Wrap {
            domain: Domain::Custom("https://private.example/".into()),
        };
        let text = toml::to_string(&w).unwrap();
        assert_eq!(text.trim(), "domain = \"https://private.example/\"");

        let back: Wrap = toml::from_str(&text).unwrap();
        assert_eq!(back.domain, w.domain);

        let face_in = Wrap {
            domain: Domain::FaceIn,
        };
        assert_eq!(toml::to_string(&face_in).unwrap().trim(), "domain = \"face_in\"");
    }
}
