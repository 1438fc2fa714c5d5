use crate::exposureweight::builtin::bisquare::Bisquare;
use crate::exposureweight::builtin::fullsinusoidal::FullSinusoidal;
use crate::exposureweight::builtin::gaussian::Gaussian;
use crate::exposureweight::builtin::halfsinusoidal::HalfSinusoidal;
use crate::exposureweight::builtin::lorentzian::Lorentzian;
use crate::exposureweight::exposureweight::ExposureWeight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltInWeightType {
    Gaussian,
    Lorentzian,
    HalfSinusoidal,
    FullSinusoidal,
    Bisquare
}

// Names are matched after lowercasing.
static BUILT_IN_NAMES: [(&str, BuiltInWeightType); 10] = [
    ("gauss",      BuiltInWeightType::Gaussian),
    ("gaussian",   BuiltInWeightType::Gaussian),
    ("lorentz",    BuiltInWeightType::Lorentzian),
    ("lorentzian", BuiltInWeightType::Lorentzian),
    ("halfsine",   BuiltInWeightType::HalfSinusoidal),
    ("half-sine",  BuiltInWeightType::HalfSinusoidal),
    ("fullsine",   BuiltInWeightType::FullSinusoidal),
    ("full-sine",  BuiltInWeightType::FullSinusoidal),
    ("bisquare",   BuiltInWeightType::Bisquare),
    ("bi-square",  BuiltInWeightType::Bisquare),
];

impl BuiltInWeightType {
    pub fn from_name(name: &str) -> Option<BuiltInWeightType> {
        let canonical = name.to_lowercase();
        BUILT_IN_NAMES
            .iter()
            .find(|(alias, _)| *alias == canonical)
            .map(|(_, weight_type)| *weight_type)
    }

    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        BUILT_IN_NAMES
            .iter()
            .filter(move |(_, weight_type)| *weight_type == self)
            .map(|(alias, _)| *alias)
    }

    pub fn all() -> [BuiltInWeightType; 5] {
        [
            BuiltInWeightType::Gaussian,
            BuiltInWeightType::Lorentzian,
            BuiltInWeightType::HalfSinusoidal,
            BuiltInWeightType::FullSinusoidal,
            BuiltInWeightType::Bisquare,
        ]
    }

    pub fn generate(self, y_optimum: f64, width: f64) -> Box<dyn ExposureWeight> {
        match self {
            BuiltInWeightType::Gaussian       => Box::new(Gaussian::new(y_optimum, width)),
            BuiltInWeightType::Lorentzian     => Box::new(Lorentzian::new(y_optimum, width)),
            BuiltInWeightType::HalfSinusoidal => Box::new(HalfSinusoidal::new(y_optimum, width)),
            BuiltInWeightType::FullSinusoidal => Box::new(FullSinusoidal::new(y_optimum, width)),
            BuiltInWeightType::Bisquare       => Box::new(Bisquare::new(y_optimum, width)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_two_aliases() {
        for weight_type in BuiltInWeightType::all() {
            let aliases: Vec<&str> = weight_type.aliases().collect();
            assert_eq!(aliases.len(), 2, "{:?}", weight_type);
            for alias in aliases {
                assert_eq!(BuiltInWeightType::from_name(alias), Some(weight_type));
            }
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(BuiltInWeightType::from_name("GAUSS"), Some(BuiltInWeightType::Gaussian));
        assert_eq!(BuiltInWeightType::from_name("Half-Sine"), Some(BuiltInWeightType::HalfSinusoidal));
        assert_eq!(BuiltInWeightType::from_name("halfsin"), None);
        assert_eq!(BuiltInWeightType::from_name(""), None);
    }
}
