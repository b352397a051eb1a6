use std::path::Path;

use tracing::debug;
use url::Url;

use super::Profile;
use crate::error::{FolioError, Result};

/// Read and validate a profile file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let profile = parse_profile(&content).map_err(|e| match e {
        FolioError::Config { message, .. } => FolioError::Config {
            path: path.display().to_string(),
            message,
        },
        other => other,
    })?;
    debug!(
        path = %path.display(),
        skills = profile.skills.len(),
        projects = profile.projects.len(),
        "profile loaded"
    );
    Ok(profile)
}

/// Parse and validate a profile from TOML text.
pub fn parse_profile(content: &str) -> Result<Profile> {
    let profile: Profile = toml::from_str(content).map_err(|e| FolioError::Config {
        path: "<profile>".into(),
        message: e.to_string(),
    })?;
    validate_profile(&profile)?;
    Ok(profile)
}

fn scheme_of(url: &str) -> Option<String> {
    Url::parse(url).ok().map(|u| u.scheme().to_string())
}

fn is_web_url(url: &str) -> bool {
    matches!(scheme_of(url).as_deref(), Some("http" | "https"))
}

pub fn validate_profile(profile: &Profile) -> Result<()> {
    if profile.first_name.trim().is_empty() {
        return Err(FolioError::invalid_profile("name is empty"));
    }

    for (i, skill) in profile.skills.iter().enumerate() {
        if skill.title.trim().is_empty() {
            return Err(FolioError::invalid_profile(format!("skill {} has no title", i + 1)));
        }
    }

    for (i, project) in profile.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            return Err(FolioError::invalid_profile(format!("project {} has no title", i + 1)));
        }
        if !is_web_url(&project.repository_url) {
            return Err(FolioError::invalid_profile(format!(
                "project '{}' repository url must be http(s): {}",
                project.title, project.repository_url
            )));
        }
    }

    for link in &profile.contact {
        if !is_web_url(&link.url) && scheme_of(&link.url).as_deref() != Some("mailto") {
            return Err(FolioError::invalid_profile(format!(
                "contact '{}' url must be http(s) or mailto: {}",
                link.label, link.url
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_profile;
    use std::io::Write;

    #[test]
    fn test_round_trip_builtin() {
        let original = builtin_profile();
        let text = toml::to_string(&original).unwrap();
        let parsed = parse_profile(&text).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&builtin_profile()).unwrap()).unwrap();
        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.first_name, "Ritik");
    }

    #[test]
    fn test_rejects_non_http_repository() {
        let mut profile = builtin_profile();
        profile.projects[1].repository_url = "ftp://example.com/repo".into();
        let text = toml::to_string(&profile).unwrap();
        let err = parse_profile(&text).unwrap_err();
        assert!(matches!(err, FolioError::InvalidProfile { .. }));
    }

    #[test]
    fn test_rejects_untitled_skill() {
        let mut profile = builtin_profile();
        profile.skills[4].title = "  ".into();
        assert!(matches!(
            validate_profile(&profile),
            Err(FolioError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn test_contact_accepts_mailto() {
        let mut profile = builtin_profile();
        profile.contact[0].url = "mailto:someone@example.com".into();
        assert!(validate_profile(&profile).is_ok());
        profile.contact[0].url = "someone@example.com".into();
        assert!(validate_profile(&profile).is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = load_from_str_file("first_name = ").unwrap_err();
        match err {
            FolioError::Config { path, .. } => assert!(path.ends_with(".toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    fn load_from_str_file(content: &str) -> Result<Profile> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{content}").unwrap();
        load_profile(file.path())
    }
}
