use expoweight::exposureweight::builtin::builtinweighttype::BuiltInWeightType;
use expoweight::exposureweight::diagnostics::check_weight_function;
use expoweight::exposureweight::exposureweightfactory::WeightFunctionFactory;
use proptest::prelude::*;

const SAMPLES: usize = 1000;

fn arb_weight_type() -> impl Strategy<Value = BuiltInWeightType> {
    prop_oneof![
        Just(BuiltInWeightType::Gaussian),
        Just(BuiltInWeightType::Lorentzian),
        Just(BuiltInWeightType::HalfSinusoidal),
        Just(BuiltInWeightType::FullSinusoidal),
        Just(BuiltInWeightType::Bisquare),
    ]
}

// Every curve reaches exactly 1.0 at its optimum, so the grid must not come
// too close to it.
fn clear_of_grid(y_optimum: f64) -> bool {
    (0..SAMPLES)
        .map(|i| i as f64 / (SAMPLES - 1) as f64)
        .all(|x| (x - y_optimum).abs() > 1e-6)
}

proptest! {
    #[test]
    fn builtins_stay_within_range(
        weight_type in arb_weight_type(),
        y_optimum in 0.0f64..=1.0,
        width in 0.01f64..2.0
    ) {
        prop_assume!(clear_of_grid(y_optimum));
        let function = weight_type.generate(y_optimum, width);
        prop_assert!(check_weight_function(function.as_ref(), SAMPLES));
    }

    #[test]
    fn builtins_never_go_negative(
        weight_type in arb_weight_type(),
        y_optimum in 0.0f64..=1.0,
        width in 0.01f64..2.0,
        y in -1.0f64..2.0
    ) {
        let function = weight_type.generate(y_optimum, width);
        let w = function.weight(y);
        prop_assert!((0.0..=1.0).contains(&w), "{:?} gave {}", weight_type, w);
    }

    #[test]
    fn factory_ignores_name_case(
        weight_type in arb_weight_type(),
        upper in proptest::bool::ANY,
        y in 0.0f64..=1.0
    ) {
        let factory = WeightFunctionFactory::without_dynamic_loading();
        for alias in weight_type.aliases() {
            let name = if upper { alias.to_uppercase() } else { alias.to_owned() };
            let function = factory.make_weight_function(&name, &[], 0.5, 0.2).unwrap();
            prop_assert_eq!(function.weight(y), weight_type.generate(0.5, 0.2).weight(y));
        }
    }
}
