use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Id,
            Language::Id => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "id" => Ok(Language::Id),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Every piece of page text that has an Indonesian rendition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextKey {
    NavHome,
    NavAbout,
    NavProjects,
    NavContact,
    HeroGreeting,
    HeroTagline,
    DownloadCv,
    AboutHeading,
    AboutBody,
    StatProjects,
    StatStars,
    StatLanguages,
    ProjectsHeading,
    FilterAll,
    FilterPython,
    FilterShell,
    FilterWeb,
    FilterSecurity,
    ContactHeading,
    ContactBody,
    ViewCode,
    Demo,
}

impl TextKey {
    pub const ALL: &[TextKey] = &[
        TextKey::NavHome,
        TextKey::NavAbout,
        TextKey::NavProjects,
        TextKey::NavContact,
        TextKey::HeroGreeting,
        TextKey::HeroTagline,
        TextKey::DownloadCv,
        TextKey::AboutHeading,
        TextKey::AboutBody,
        TextKey::StatProjects,
        TextKey::StatStars,
        TextKey::StatLanguages,
        TextKey::ProjectsHeading,
        TextKey::FilterAll,
        TextKey::FilterPython,
        TextKey::FilterShell,
        TextKey::FilterWeb,
        TextKey::FilterSecurity,
        TextKey::ContactHeading,
        TextKey::ContactBody,
        TextKey::ViewCode,
        TextKey::Demo,
    ];
}

pub fn text(key: TextKey, lang: Language) -> &'static str {
    let (en, id) = match key {
        TextKey::NavHome => ("Home", "Beranda"),
        TextKey::NavAbout => ("About", "Tentang"),
        TextKey::NavProjects => ("Projects", "Proyek"),
        TextKey::NavContact => ("Contact", "Kontak"),
        TextKey::HeroGreeting => ("Hi, I'm Danang Tri Atmaja", "Halo, saya Danang Tri Atmaja"),
        TextKey::HeroTagline => (
            "Security enthusiast and developer",
            "Penggiat keamanan dan pengembang",
        ),
        TextKey::DownloadCv => ("Download CV", "Unduh CV"),
        TextKey::AboutHeading => ("About Me", "Tentang Saya"),
        TextKey::AboutBody => (
            "I build tools for penetration testing, automation and the web.",
            "Saya membuat alat untuk uji penetrasi, otomasi, dan web.",
        ),
        TextKey::StatProjects => ("Projects", "Proyek"),
        TextKey::StatStars => ("Stars", "Bintang"),
        TextKey::StatLanguages => ("Languages", "Bahasa"),
        TextKey::ProjectsHeading => ("My Projects", "Proyek Saya"),
        TextKey::FilterAll => ("Featured", "Unggulan"),
        TextKey::FilterPython => ("Python", "Python"),
        TextKey::FilterShell => ("Shell", "Shell"),
        TextKey::FilterWeb => ("Web", "Web"),
        TextKey::FilterSecurity => ("Security", "Keamanan"),
        TextKey::ContactHeading => ("Get In Touch", "Hubungi Saya"),
        TextKey::ContactBody => (
            "Reach me on GitHub: github.com/andknownmaly",
            "Hubungi saya di GitHub: github.com/andknownmaly",
        ),
        TextKey::ViewCode => ("View Code", "Lihat Kode"),
        TextKey::Demo => ("Demo", "Demo"),
    };
    match lang {
        Language::En => en,
        Language::Id => id,
    }
}
