//! Fixed portfolio identity. Not runtime-configurable.

pub const ACCOUNT: &str = "andknownmaly";

pub const CV_URL: &str = "https://github.com/andknownmaly/andknownmaly.github.io/releases/download/cv-1/Danang.Tri.Atmaja_CV.pdf";

pub const FEATURED: &[&str] = &[
    "tiktok-sentiment-analysis",
    "OpenVPN-GUI",
    "student-picts",
    "CVE-2019-16278",
    "ShellPhant0m",
    "packettracer",
    "cupang",
    "EncryptDecrypt",
    "malware-detector",
    "google-dork",
    "guidork",
    "ReverseShellBuilder",
];

pub const PER_PAGE: u8 = 100;
pub const MAX_FILTERED: usize = 12;
pub const MAX_CARD_TOPICS: usize = 5;

pub const SHADOW_THRESHOLD_PX: u32 = 50;
pub const REVEAL_THRESHOLD: f32 = 0.1;
pub const REVEAL_BOTTOM_MARGIN_PX: u32 = 100;

pub fn is_featured(name: &str) -> bool {
    FEATURED.contains(&name)
}
