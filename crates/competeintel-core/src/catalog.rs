//! Fixed reference tables: supported business categories and cities.
//!
//! Both tables are compile-time constants, so concurrent readers never need
//! synchronization.

use serde::{Deserialize, Serialize};

use crate::competitor::Coordinates;

/// Business segments the platform knows how to analyse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessCategory {
    Padaria,
    Restaurante,
    #[serde(rename = "Farmácia")]
    Farmacia,
    Supermercado,
    Cafeteria,
    Academia,
    #[serde(rename = "Pet Shop")]
    PetShop,
    Lanchonete,
}

/// All categories in display order.
pub const CATEGORIES: [BusinessCategory; 8] = [
    BusinessCategory::Padaria,
    BusinessCategory::Restaurante,
    BusinessCategory::Farmacia,
    BusinessCategory::Supermercado,
    BusinessCategory::Cafeteria,
    BusinessCategory::Academia,
    BusinessCategory::PetShop,
    BusinessCategory::Lanchonete,
];

impl BusinessCategory {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Padaria => "Padaria",
            Self::Restaurante => "Restaurante",
            Self::Farmacia => "Farmácia",
            Self::Supermercado => "Supermercado",
            Self::Cafeteria => "Cafeteria",
            Self::Academia => "Academia",
            Self::PetShop => "Pet Shop",
            Self::Lanchonete => "Lanchonete",
        }
    }

    /// Resolve a user-supplied category name.
    ///
    /// Matching ignores surrounding whitespace and letter case but nothing
    /// else: `"farmacia"` without the accent is not a match.
    #[must_use]
    pub fn from_name(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        CATEGORIES
            .into_iter()
            .find(|c| c.name().to_lowercase() == wanted)
    }

    /// CNAE (Brazilian economic activity classification) code.
    #[must_use]
    pub fn cnae_code(self) -> &'static str {
        match self {
            Self::Padaria => "4721-1/02",
            Self::Restaurante => "5611-2/01",
            Self::Farmacia => "4771-7/01",
            Self::Supermercado => "4711-3/02",
            Self::Cafeteria => "5611-2/04",
            Self::Academia => "9313-1/00",
            Self::PetShop => "4789-0/05",
            Self::Lanchonete => "5611-2/03",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Padaria => "Padaria e confeitaria com predominância de produção própria",
            Self::Restaurante => "Restaurantes e similares",
            Self::Farmacia => "Comércio varejista de produtos farmacêuticos",
            Self::Supermercado => "Supermercado",
            Self::Cafeteria => {
                "Bares e outros estabelecimentos especializados em servir bebidas"
            }
            Self::Academia => "Atividades de condicionamento físico",
            Self::PetShop => {
                "Comércio varejista de animais vivos e de artigos e alimentos para animais de estimação"
            }
            Self::Lanchonete => "Lanchonetes, casas de chá, de sucos e similares",
        }
    }

    /// Business-name templates; `{}` is replaced by a location word.
    #[must_use]
    pub fn name_templates(self) -> &'static [&'static str] {
        match self {
            Self::Padaria => &[
                "Padaria {} Pães",
                "Padaria e Confeitaria {}",
                "Pão Quente {}",
                "{} Padaria Artesanal",
                "Delícias da {}",
                "Padaria Tradicional {}",
                "Casa do Pão {}",
                "{} Bakery",
                "Sabor e Arte {}",
            ],
            Self::Restaurante => &[
                "Restaurante {}",
                "Sabor da {}",
                "{} Gourmet",
                "Cozinha {}",
                "Tempero {}",
                "Delícias {}",
                "{} Food",
                "Bistrô {}",
                "Cantina {}",
                "{} Mesa",
            ],
            Self::Farmacia => &[
                "Farmácia {}",
                "Drogaria {}",
                "{} Farma",
                "Farmácia Popular {}",
                "{} Saúde",
                "Bem Estar {}",
                "Farmácia São {}",
                "{} Medicamentos",
            ],
            Self::Supermercado => &[
                "Supermercado {}",
                "Super {}",
                "{} Alimentos",
                "Mercado {}",
                "{} Super",
                "Empório {}",
                "Mini Mercado {}",
                "{} Market",
            ],
            Self::Cafeteria => &[
                "Café {}",
                "Cafeteria {}",
                "{} Coffee",
                "Coffee {}",
                "Aroma de {}",
                "{} Espresso",
                "Café Especial {}",
                "{} Café",
            ],
            Self::Academia => &[
                "Academia {}",
                "Fitness {}",
                "{} Gym",
                "Shape {}",
                "Corpo e Mente {}",
                "{} Fitness",
                "Esporte {}",
                "{} Training",
            ],
            Self::PetShop => &[
                "Pet Shop {}",
                "Mundo Pet {}",
                "{} Pets",
                "Bicho {}",
                "{} Pet Store",
                "Amigo Animal {}",
                "Pet {}",
                "{} Vet Shop",
            ],
            Self::Lanchonete => &[
                "Lanchonete {}",
                "Lanches {}",
                "{} Burger",
                "Snack {}",
                "{} Lanches",
                "Quick {}",
                "Fast {}",
                "{} Express",
            ],
        }
    }
}

impl std::fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A supported city with its centre coordinate and state code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub state: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub static CITIES: [City; 10] = [
    City {
        name: "São Paulo",
        state: "SP",
        latitude: -23.550_5,
        longitude: -46.633_3,
    },
    City {
        name: "Rio de Janeiro",
        state: "RJ",
        latitude: -22.906_8,
        longitude: -43.172_9,
    },
    City {
        name: "Belo Horizonte",
        state: "MG",
        latitude: -19.916_7,
        longitude: -43.934_5,
    },
    City {
        name: "Brasília",
        state: "DF",
        latitude: -15.793_9,
        longitude: -47.882_8,
    },
    City {
        name: "Curitiba",
        state: "PR",
        latitude: -25.428_4,
        longitude: -49.273_3,
    },
    City {
        name: "Porto Alegre",
        state: "RS",
        latitude: -30.034_6,
        longitude: -51.217_7,
    },
    City {
        name: "Salvador",
        state: "BA",
        latitude: -12.971_4,
        longitude: -38.501_4,
    },
    City {
        name: "Fortaleza",
        state: "CE",
        latitude: -3.717_2,
        longitude: -38.543_4,
    },
    City {
        name: "Recife",
        state: "PE",
        latitude: -8.047_6,
        longitude: -34.877_0,
    },
    City {
        name: "Manaus",
        state: "AM",
        latitude: -3.119_0,
        longitude: -60.021_7,
    },
];

impl City {
    /// Look up a city by name, ignoring surrounding whitespace and case.
    #[must_use]
    pub fn find(raw: &str) -> Option<&'static City> {
        let wanted = raw.trim().to_lowercase();
        CITIES.iter().find(|c| c.name.to_lowercase() == wanted)
    }

    #[must_use]
    pub fn center(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
