pub mod configuration;
pub mod configurationerror;

pub mod exposureweight {
    pub mod exposureweight;
    pub mod exposureweighterror;
    pub mod exposureweightfactory;
    pub mod diagnostics;

    pub mod builtin {
        pub mod builtinweighttype;
        pub mod gaussian;
        pub mod lorentzian;
        pub mod halfsinusoidal;
        pub mod fullsinusoidal;
        pub mod bisquare;
    }

    pub mod dynamic {
        pub mod dynamicloader;
        pub mod foreignweight;
        pub mod dynamicexposureweight;
    }
}

pub mod tracingsetup;
