use cosmwasm_schema::cw_serde;

/// The breed assigned to a minted token. The discriminant doubles as the
/// index into the contract's token URI table.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Breed {
    Pug,
    ShibaInu,
    StBernard,
}

impl Breed {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            Breed::Pug => 0,
            Breed::ShibaInu => 1,
            Breed::StBernard => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breed::Pug => "pug",
            Breed::ShibaInu => "shiba_inu",
            Breed::StBernard => "st_bernard",
        }
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Breed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pug" => Ok(Breed::Pug),
            "shiba_inu" => Ok(Breed::ShibaInu),
            "st_bernard" => Ok(Breed::StBernard),
            other => Err(format!("unknown breed: {other}")),
        }
    }
}
