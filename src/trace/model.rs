//! Typed internal representation of a parsed trace.
//!
//! One turn fuses an action record with its answer record: the answer's
//! `extras` payload is not self-describing, so it can only be interpreted
//! once the paired action type is known. `TurnDetail` carries both sides
//! as one variant per known action kind, turning the string dispatch of
//! the source format into an exhaustive match.

/// A fully parsed trace: one setup record plus the paired turns
#[derive(Debug, Clone)]
pub struct Trace {
    pub setup: Setup,
    pub turns: Vec<Turn>,
}

/// Initialization data from record 0
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Setup {
    /// Initial compass heading
    pub heading: String,

    /// Crew size
    pub men: i64,

    /// Resource contracts to fulfil (may be empty)
    pub contracts: Vec<Contract>,

    /// Action-point budget
    pub budget: i64,
}

/// One resource contract from the setup record
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Contract {
    pub amount: i64,
    pub resource: String,
}

/// One action/answer pair in trace order
#[derive(Debug, Clone)]
pub struct Turn {
    /// Raw action type tag, kept verbatim for the `type` attribute
    pub action_type: String,

    /// Answer status string
    pub status: String,

    /// Action-point cost of this turn
    pub cost: i64,

    /// Type-specific parameters and extras
    pub detail: TurnDetail,
}

/// Action parameters and answer extras, one variant per known action kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnDetail {
    Echo {
        direction: String,
        found: String,
        range: i64,
    },
    Heading {
        direction: String,
    },
    MoveTo {
        direction: String,
    },
    Scout {
        direction: String,
        altitude: i64,
        resources: Vec<String>,
    },
    Glimpse {
        direction: String,
        tiles: Vec<TileReport>,
    },
    Transform {
        /// Input resources in source declaration order
        inputs: Vec<(String, i64)>,
        kind: String,
        production: i64,
    },
    Exploit {
        resource: String,
        amount: i64,
    },
    Explore {
        resources: Vec<ExploreResource>,
    },
    Land {
        creek: String,
        people: i64,
    },
    Scan {
        biomes: Vec<String>,
        sites: Vec<String>,
        creeks: Vec<String>,
    },
    /// Unrecognized action type: no parameters or extras are consumed
    Unknown,
}

/// One entry of a glimpse report, resolved by structural inspection:
/// a flat alternating biome/percent list, or a bare resource name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileReport {
    Biomes(Vec<(String, i64)>),
    Resource(String),
}

/// One resource sighting from an explore answer; quantity and difficulty
/// stay verbatim strings since the source may carry condition codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreResource {
    pub name: String,
    pub quantity: String,
    pub difficulty: String,
}
