//! Household pets.
//!
//! A pet is a name and colour tagged with a [`PetKind`]. The domestic kinds
//! pin the species and are the only ones that can speak; see [`CAPABILITIES`].

use serde::{Deserialize, Serialize};

pub const CAT_SPECIES: &str = "Felis Catus";
pub const DOG_SPECIES: &str = "Canis lupus familiaris";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PetKind {
    Household { species: String },
    DomesticCat,
    DomesticDog,
}

/// Kind tag without payload, used as the capability table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialization {
    Cat,
    Dog,
}

pub struct Capability {
    pub specialization: Specialization,
    pub species: &'static str,
    pub sound: &'static str,
}

pub static CAPABILITIES: [Capability; 2] = [
    Capability {
        specialization: Specialization::Cat,
        species: CAT_SPECIES,
        sound: "meow",
    },
    Capability {
        specialization: Specialization::Dog,
        species: DOG_SPECIES,
        sound: "woof",
    },
];

impl PetKind {
    pub fn specialization(&self) -> Option<Specialization> {
        match self {
            PetKind::Household { .. } => None,
            PetKind::DomesticCat => Some(Specialization::Cat),
            PetKind::DomesticDog => Some(Specialization::Dog),
        }
    }

    fn capability(&self) -> Option<&'static Capability> {
        let specialization = self.specialization()?;
        CAPABILITIES
            .iter()
            .find(|c| c.specialization == specialization)
    }

    pub fn species(&self) -> &str {
        match self {
            PetKind::Household { species } => species.as_str(),
            _ => self.capability().map(|c| c.species).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    #[serde(flatten)]
    pub kind: PetKind,
    pub name: String,
    pub color: String,
}

impl Pet {
    /// A generic household pet of any species.
    pub fn new(
        species: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            kind: PetKind::Household {
                species: species.into(),
            },
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn cat(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            kind: PetKind::DomesticCat,
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn dog(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            kind: PetKind::DomesticDog,
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn species(&self) -> &str {
        self.kind.species()
    }

    /// `"{name} is a {color} {species}"`
    pub fn info(&self) -> String {
        format!("{} is a {} {}", self.name, self.color, self.species())
    }

    /// The pet's sound. Plain household pets have none.
    pub fn speak(&self) -> Option<&'static str> {
        self.kind.capability().map(|c| c.sound)
    }
}
