use std::sync::LazyLock;

use crate::domain::model::RadioModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Radio models bundled with the crate.
///
/// This is a convenience mirror of the service catalog, updated only with new crate
/// releases. The `list` operation is authoritative and may contain models (or
/// constraints) this table does not know about. Variants marked as inferred may reject
/// serials the service accepts; use `info` for their authoritative constraints.
pub enum KnownRadioModel {
    RenaultDacia,
    ChryslerPanasonicTm9,
    FordMSeries,
    FordVSeries,
    FordTravelpilot,
    FiatStiloBravoVisteon,
    /// Constraints inferred from a known-good serial, not published by the service.
    FiatDaiichi,
    /// Constraints inferred from a known-good serial, not published by the service.
    FiatVp,
    ToyotaErc,
    JeepCherokee,
    /// Constraints inferred from a known-good serial, not published by the service.
    NissanGloveBox,
    /// Constraints inferred from a known-good serial, not published by the service.
    EclipseEsn,
    /// Constraints inferred from a known-good serial, not published by the service.
    JaguarAlpine,
}

struct BuiltIn {
    name: &'static str,
    serial_max_len: usize,
    serial_pattern: &'static str,
}

const BUILT_INS: [BuiltIn; 13] = [
    BuiltIn {
        name: "renault-dacia",
        serial_max_len: 4,
        serial_pattern: r"^([A-Z]{1}[0-9]{3})$",
    },
    BuiltIn {
        name: "chrysler-panasonic-tm9",
        serial_max_len: 4,
        serial_pattern: r"^([0-9]{4})$",
    },
    BuiltIn {
        name: "ford-m-series",
        serial_max_len: 6,
        serial_pattern: r"^([0-9]{6})$",
    },
    BuiltIn {
        name: "ford-v-series",
        serial_max_len: 6,
        serial_pattern: r"^([0-9]{6})$",
    },
    BuiltIn {
        name: "ford-travelpilot",
        serial_max_len: 7,
        serial_pattern: r"^([0-9]{7})$",
    },
    BuiltIn {
        name: "fiat-stilo-bravo-visteon",
        serial_max_len: 6,
        serial_pattern: r"^([a-zA-Z0-9]{6})$",
    },
    BuiltIn {
        name: "fiat-daiichi",
        serial_max_len: 4,
        serial_pattern: r"^([0-9]{4})$",
    },
    BuiltIn {
        name: "fiat-vp",
        serial_max_len: 4,
        serial_pattern: r"^([0-9]{4})$",
    },
    BuiltIn {
        name: "toyota-erc",
        serial_max_len: 16,
        serial_pattern: r"^([a-zA-Z0-9]{16})$",
    },
    BuiltIn {
        name: "jeep-cherokee",
        serial_max_len: 14,
        serial_pattern: r"^([a-zA-Z0-9]{10}[0-9]{4})$",
    },
    BuiltIn {
        name: "nissan-glove-box",
        serial_max_len: 12,
        serial_pattern: r"^([a-zA-Z0-9]{12})$",
    },
    BuiltIn {
        name: "eclipse-esn",
        serial_max_len: 6,
        serial_pattern: r"^([a-zA-Z0-9]{6})$",
    },
    BuiltIn {
        name: "jaguar-alpine",
        serial_max_len: 5,
        serial_pattern: r"^([0-9]{5})$",
    },
];

static DESCRIPTORS: LazyLock<Vec<RadioModel>> = LazyLock::new(|| {
    BUILT_INS
        .iter()
        .map(|entry| {
            RadioModel::new(entry.name, entry.serial_max_len, entry.serial_pattern)
                .unwrap_or_else(|err| panic!("built-in radio model {}: {err}", entry.name))
        })
        .collect()
});

impl KnownRadioModel {
    /// Every bundled model, in catalog order.
    pub const ALL: [Self; 13] = [
        Self::RenaultDacia,
        Self::ChryslerPanasonicTm9,
        Self::FordMSeries,
        Self::FordVSeries,
        Self::FordTravelpilot,
        Self::FiatStiloBravoVisteon,
        Self::FiatDaiichi,
        Self::FiatVp,
        Self::ToyotaErc,
        Self::JeepCherokee,
        Self::NissanGloveBox,
        Self::EclipseEsn,
        Self::JaguarAlpine,
    ];

    fn index(self) -> usize {
        match self {
            Self::RenaultDacia => 0,
            Self::ChryslerPanasonicTm9 => 1,
            Self::FordMSeries => 2,
            Self::FordVSeries => 3,
            Self::FordTravelpilot => 4,
            Self::FiatStiloBravoVisteon => 5,
            Self::FiatDaiichi => 6,
            Self::FiatVp => 7,
            Self::ToyotaErc => 8,
            Self::JeepCherokee => 9,
            Self::NissanGloveBox => 10,
            Self::EclipseEsn => 11,
            Self::JaguarAlpine => 12,
        }
    }

    /// Wire name of the model (e.g. `ford-m-series`).
    pub fn name(self) -> &'static str {
        BUILT_INS[self.index()].name
    }

    /// The bundled descriptor for this model.
    pub fn descriptor(self) -> &'static RadioModel {
        &DESCRIPTORS[self.index()]
    }

    /// Look up a bundled model by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.name() == name)
    }
}
