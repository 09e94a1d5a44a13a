use std::fmt;

/// The character classes a player can sign up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerClass {
    OffTank,
    ArcanoElevado,
    ArcanoSilence,
    MainHealer,
    RaizFerrea,
    Quebrareinos,
    Incubo,
    Bruxo,
    DpsFrost,
    DpsFire,
    DpsAguia,
    DpsXbow,
    DpsFoiceDeCristal,
}

impl PlayerClass {
    /// In the order they are offered on the form.
    pub const ALL: [PlayerClass; 13] = [
        PlayerClass::OffTank,
        PlayerClass::ArcanoElevado,
        PlayerClass::ArcanoSilence,
        PlayerClass::MainHealer,
        PlayerClass::RaizFerrea,
        PlayerClass::Quebrareinos,
        PlayerClass::Incubo,
        PlayerClass::Bruxo,
        PlayerClass::DpsFrost,
        PlayerClass::DpsFire,
        PlayerClass::DpsAguia,
        PlayerClass::DpsXbow,
        PlayerClass::DpsFoiceDeCristal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerClass::OffTank => "OFF TANK",
            PlayerClass::ArcanoElevado => "ARCANO ELEVADO",
            PlayerClass::ArcanoSilence => "ARCANO SILENCE",
            PlayerClass::MainHealer => "MAIN HEALER",
            PlayerClass::RaizFerrea => "RAIZ FERREA",
            PlayerClass::Quebrareinos => "QUEBRAREINOS",
            PlayerClass::Incubo => "INCUBO",
            PlayerClass::Bruxo => "BRUXO",
            PlayerClass::DpsFrost => "DPS - Frost",
            PlayerClass::DpsFire => "DPS - Fire",
            PlayerClass::DpsAguia => "DPS - Aguia",
            PlayerClass::DpsXbow => "DPS - Xbow",
            PlayerClass::DpsFoiceDeCristal => "DPS - Foice de Cristal",
        }
    }

    /// Labels must match exactly, as they are sent by the form select.
    pub fn parse(s: &str) -> Result<PlayerClass, String> {
        Self::ALL
            .into_iter()
            .find(|class| class.label() == s)
            .ok_or_else(|| format!("{s} is not a known player class"))
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for PlayerClass {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PlayerClass> for String {
    fn from(class: PlayerClass) -> Self {
        class.label().to_string()
    }
}
