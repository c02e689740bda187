use crate::cli::EditArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use kkredit::core::composition::Composition;
use kkredit::core::models::position::Coordinates;
use kkredit::core::models::type_def::{Species, TypeDefinition};
use kkredit::edit::mixing::SiteMixture;
use kkredit::edit::overrides::TypeOverrides;
use kkredit::workflows::recipe::{EditRecipe, EditStep};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialSite {
    x: String,
    y: String,
    z: String,
    label: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialComponent {
    #[serde(rename = "atomic-number")]
    atomic_number: u32,
    weight: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case", tag = "kind", deny_unknown_fields)]
enum PartialStep {
    ReplaceIndex {
        mapping: BTreeMap<String, String>,
    },
    ReplaceCoordinate {
        sites: Vec<PartialSite>,
    },
    Relabel {
        mapping: HashMap<String, String>,
    },
    AddType {
        label: String,
        ncmp: Option<usize>,
        rmt: f64,
        field: f64,
        mxl: i32,
        species: Vec<(u32, f64)>,
    },
    ModifyType {
        label: String,
        species: Option<Vec<(u32, f64)>>,
        ncmp: Option<usize>,
        rmt: Option<f64>,
        field: Option<f64>,
        mxl: Option<i32>,
    },
    Mix {
        #[serde(rename = "target-label")]
        target_label: String,
        #[serde(rename = "new-label")]
        new_label: Option<String>,
        species: Vec<PartialComponent>,
        #[serde(default)]
        simplex: bool,
        rmt: Option<f64>,
        field: Option<f64>,
        mxl: Option<i32>,
    },
}

fn to_species(pairs: Vec<(u32, f64)>) -> Vec<Species> {
    pairs.into_iter().map(Species::from).collect()
}

fn build_composition(components: &[PartialComponent], simplex: bool) -> Result<Composition> {
    let atomic_numbers: Vec<u32> = components.iter().map(|c| c.atomic_number).collect();
    let weighted = if simplex {
        &components[..components.len().saturating_sub(1)]
    } else {
        components
    };
    let weights = weighted
        .iter()
        .map(|c| {
            c.weight.ok_or_else(|| {
                CliError::Config(format!(
                    "Mix component with atomic number {} is missing a weight.",
                    c.atomic_number
                ))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    let composition = if simplex {
        Composition::from_stick_breaking(&atomic_numbers, &weights)
    } else {
        Composition::from_weights(&atomic_numbers, &weights)
    };
    composition.map_err(|e| CliError::Config(format!("Invalid mix composition: {e}")))
}

impl TryFrom<PartialStep> for EditStep {
    type Error = CliError;

    fn try_from(p: PartialStep) -> Result<Self> {
        let step = match p {
            PartialStep::ReplaceIndex { mapping } => {
                let mapping = mapping
                    .into_iter()
                    .map(|(index, label)| Ok((parser::parse_index(&index)?, label)))
                    .collect::<Result<HashMap<usize, String>>>()?;
                EditStep::ReplaceByIndex(mapping)
            }
            PartialStep::ReplaceCoordinate { sites } => EditStep::ReplaceByCoordinate(
                sites
                    .into_iter()
                    .map(|s| (Coordinates::new(s.x, s.y, s.z), s.label))
                    .collect(),
            ),
            PartialStep::Relabel { mapping } => EditStep::ReplaceByLabel(mapping),
            PartialStep::AddType {
                label,
                ncmp,
                rmt,
                field,
                mxl,
                species,
            } => {
                let species = to_species(species);
                let ncmp = ncmp.unwrap_or(species.len());
                EditStep::AddType(TypeDefinition::new(label, ncmp, rmt, field, mxl, species))
            }
            PartialStep::ModifyType {
                label,
                species,
                ncmp,
                rmt,
                field,
                mxl,
            } => EditStep::ModifyType {
                label,
                overrides: TypeOverrides {
                    species: species.map(to_species),
                    species_count: ncmp,
                    muffin_tin_radius: rmt,
                    external_field: field,
                    max_angular_momentum: mxl,
                },
            },
            PartialStep::Mix {
                target_label,
                new_label,
                species,
                simplex,
                rmt,
                field,
                mxl,
            } => {
                let composition = build_composition(&species, simplex)?;
                EditStep::MixSite(SiteMixture {
                    target_label,
                    new_label,
                    composition,
                    muffin_tin_radius: rmt,
                    external_field: field,
                    max_angular_momentum: mxl,
                })
            }
        };
        Ok(step)
    }
}

/// An edit recipe as written in a TOML file: an array of `[[step]]` tables,
/// each with a `kind` key.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRecipe {
    #[serde(default, rename = "step")]
    steps: Vec<PartialStep>,
}

impl PartialRecipe {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading recipe from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read recipe file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Config(format!("Failed to parse TOML recipe: {}", e)))
    }

    /// Converts the file's steps and appends the steps given on the command
    /// line: label, then index, then site replacements.
    pub fn merge_with_cli(self, args: &EditArgs) -> Result<EditRecipe> {
        let mut recipe = self
            .steps
            .into_iter()
            .map(EditStep::try_from)
            .collect::<Result<EditRecipe>>()?;

        if !args.relabel.is_empty() {
            recipe.push(EditStep::ReplaceByLabel(args.relabel.iter().cloned().collect()));
        }
        if !args.set_index.is_empty() {
            recipe.push(EditStep::ReplaceByIndex(args.set_index.iter().cloned().collect()));
        }
        if !args.set_site.is_empty() {
            recipe.push(EditStep::ReplaceByCoordinate(args.set_site.iter().cloned().collect()));
        }
        debug!("Final recipe has {} step(s).", recipe.steps().len());
        Ok(recipe)
    }
}
