//! Species-traits dataset loading.
//!
//! The dataset is a JSON array of [`SpeciesTraits`] records. Loading assigns
//! slug ids to records that lack one and rejects duplicate ids or match keys;
//! it does not judge whether the traits themselves are biologically sound.
//!
//! A process may install one [`TraitIndex`] globally. It is read-only once
//! installed and lives until exit.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use reef_core::entities::SpeciesTraits;
use reef_core::errors::CoreError;
use reef_core::ids::trait_slug;

use crate::error::CompatError;
use crate::resolver::TraitIndex;
use crate::rules::predation::unknown_prey_tags;

static GLOBAL_INDEX: OnceLock<TraitIndex> = OnceLock::new();

/// Parse a JSON array of trait records.
///
/// # Errors
///
/// Returns [`CompatError::Parse`] on malformed JSON and
/// [`CompatError::DuplicateTrait`] when ids or match keys collide.
pub fn parse_traits(json: &str, origin: &str) -> Result<Vec<SpeciesTraits>, CompatError> {
    let records: Vec<SpeciesTraits> =
        serde_json::from_str(json).map_err(|source| CompatError::Parse {
            origin: origin.to_string(),
            source,
        })?;
    normalize(records)
}

/// Read and parse a species-traits file.
///
/// # Errors
///
/// Returns [`CompatError::Io`] when the file cannot be read, otherwise see
/// [`parse_traits`].
pub fn load_traits(path: &Path) -> Result<Vec<SpeciesTraits>, CompatError> {
    let json = std::fs::read_to_string(path).map_err(|source| CompatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let traits = parse_traits(&json, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), records = traits.len(), "loaded species traits");
    Ok(traits)
}

fn normalize(mut records: Vec<SpeciesTraits>) -> Result<Vec<SpeciesTraits>, CompatError> {
    let mut ids = HashSet::with_capacity(records.len());
    let mut keys = HashSet::with_capacity(records.len());

    for record in &mut records {
        if record.id.trim().is_empty() {
            record.id = trait_slug(&record.genus_or_family);
        }
        if record.id.is_empty() {
            return Err(CoreError::Validation(format!(
                "trait record '{}' has no usable id",
                record.genus_or_family
            ))
            .into());
        }
        if !ids.insert(record.id.clone()) {
            return Err(CompatError::DuplicateTrait {
                field: "id",
                value: record.id.clone(),
            });
        }
        if !keys.insert(record.genus_or_family.trim().to_lowercase()) {
            return Err(CompatError::DuplicateTrait {
                field: "genusOrFamily",
                value: record.genus_or_family.clone(),
            });
        }
        for tag in unknown_prey_tags(record) {
            tracing::warn!(%tag, id = %record.id, "ignoring unrecognized prey tag");
        }
    }

    Ok(records)
}

/// Install the process-wide index.
///
/// # Errors
///
/// Returns [`CompatError::AlreadyInstalled`] if called twice.
pub fn install_global(index: TraitIndex) -> Result<&'static TraitIndex, CompatError> {
    GLOBAL_INDEX
        .set(index)
        .map_err(|_| CompatError::AlreadyInstalled)?;
    GLOBAL_INDEX.get().ok_or(CompatError::AlreadyInstalled)
}

/// The process-wide index, if one was installed.
#[must_use]
pub fn global_index() -> Option<&'static TraitIndex> {
    GLOBAL_INDEX.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const TWO_RECORDS: &str = r#"[
      {
        "genusOrFamily": "Amphiprion",
        "matchLevel": "genus",
        "commonGroupName": "Clownfish",
        "category": "fish",
        "waterType": "saltwater",
        "temperament": "semi-aggressive",
        "reefSafe": "yes",
        "minTankSizeLiters": 75,
        "diet": "omnivore",
        "sizeClass": "small",
        "territorial": true
      },
      {
        "id": "tangs",
        "genusOrFamily": "Acanthuridae",
        "matchLevel": "family",
        "commonGroupName": "Tangs",
        "category": "fish",
        "waterType": "saltwater",
        "temperament": "semi-aggressive",
        "reefSafe": "yes",
        "minTankSizeLiters": 380,
        "diet": "herbivore",
        "sizeClass": "medium"
      }
    ]"#;

    #[test]
    fn generates_missing_ids() {
        let traits = parse_traits(TWO_RECORDS, "inline").expect("should parse");
        assert_eq!(traits[0].id, "amphiprion");
        assert_eq!(traits[1].id, "tangs");
        assert!(traits[0].predator_of.is_empty());
        assert!(!traits[0].max_group_conflict);
    }

    #[test]
    fn rejects_duplicate_match_keys() {
        let json = TWO_RECORDS.replace("Acanthuridae", "amphiprion");
        let err = parse_traits(&json, "inline").expect_err("duplicate key");
        assert!(matches!(
            err,
            CompatError::DuplicateTrait {
                field: "genusOrFamily",
                ..
            }
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = TWO_RECORDS.replace("\"tangs\"", "\"amphiprion\"");
        let err = parse_traits(&json, "inline").expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate species trait id 'amphiprion'"));
    }

    #[test]
    fn unknown_prey_tags_still_load() {
        let json = TWO_RECORDS.replace(
            "\"territorial\": true",
            "\"territorial\": true, \"predatorOf\": [\"small_fish\", \"everything\"]",
        );
        let traits = parse_traits(&json, "inline").expect("should parse");
        assert_eq!(traits[0].predator_of, vec!["small_fish", "everything"]);
    }

    #[test]
    fn malformed_json_names_its_origin() {
        let err = parse_traits("[{", "broken.json").expect_err("malformed");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(TWO_RECORDS.as_bytes()).expect("write");
        let traits = load_traits(file.path()).expect("should load");
        assert_eq!(traits.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_traits(Path::new("/definitely/not/here.json")).expect_err("missing");
        assert!(matches!(err, CompatError::Io { .. }));
    }
}
