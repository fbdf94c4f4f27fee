//! Record pairing and field extraction.
//!
//! Walks the raw JSON array: record 0 is the setup, the rest pair up as
//! (action, answer). Each known action type has its own extraction arm;
//! unrecognized types become `TurnDetail::Unknown` without error. All
//! errors carry the offending record index and field name.

use crate::trace::model::{ExploreResource, Setup, TileReport, Trace, Turn, TurnDetail};
use crate::utils::error::TraceError;
use log::{debug, warn};
use serde_json::Value;

/// Parse a raw record array into the typed trace
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `records` - top-level JSON array, fully materialized
///
/// # Returns
/// Typed trace ready for document building
///
/// # Errors
/// * `TraceError::MissingSetup` - empty input
/// * `TraceError::InvalidSetup` - record 0 lacks required setup fields
/// * `TraceError::UnpairedRecord` - trailing action with no answer
/// * `TraceError::MissingField` / `InvalidField` - a pair lacks fields
///   required by its declared action type
pub fn parse_trace(records: &[Value]) -> Result<Trace, TraceError> {
    let setup = parse_setup(records)?;

    if (records.len() - 1) % 2 != 0 {
        return Err(TraceError::UnpairedRecord {
            index: records.len() - 1,
        });
    }

    let mut turns = Vec::with_capacity((records.len() - 1) / 2);
    for index in (1..records.len()).step_by(2) {
        turns.push(parse_turn(index, &records[index], &records[index + 1])?);
    }

    debug!("parsed setup plus {} turns", turns.len());
    Ok(Trace { setup, turns })
}

/// Deserialize the setup record (record 0)
///
/// **Private** - internal helper for parse_trace
fn parse_setup(records: &[Value]) -> Result<Setup, TraceError> {
    let first = records.first().ok_or(TraceError::MissingSetup)?;
    let data = field(0, first, "data")?;
    Ok(serde_json::from_value(data.clone())?)
}

/// Parse one (action, answer) pair into a turn
///
/// **Private** - internal helper for parse_trace
fn parse_turn(index: usize, action: &Value, answer: &Value) -> Result<Turn, TraceError> {
    let data_action = field(index, action, "data")?;
    let data_answer = field(index + 1, answer, "data")?;

    let action_type = str_field(index, data_action, "action")?;
    let status = str_field(index + 1, data_answer, "status")?;
    let cost = int_field(index + 1, data_answer, "cost")?;

    // The answer always carries an extras object, even when the action
    // type contributes nothing to it.
    let extras = field(index + 1, data_answer, "extras")?;
    if !extras.is_object() {
        return Err(TraceError::InvalidField {
            record: index + 1,
            field: "extras",
            expected: "an object",
        });
    }

    let detail = parse_detail(index, action_type, data_action, extras)?;
    if detail == TurnDetail::Unknown {
        warn!("record {}: unknown action type '{}'", index, action_type);
    }

    Ok(Turn {
        action_type: action_type.to_string(),
        status: status.to_string(),
        cost,
        detail,
    })
}

/// Extract the type-specific parameters and extras for one turn
///
/// **Private** - the per-variant dispatch
fn parse_detail(
    index: usize,
    action_type: &str,
    data_action: &Value,
    extras: &Value,
) -> Result<TurnDetail, TraceError> {
    let answer = index + 1;
    Ok(match action_type {
        "echo" => TurnDetail::Echo {
            direction: direction(index, data_action)?,
            found: str_field(answer, extras, "found")?.to_string(),
            range: int_field(answer, extras, "range")?,
        },
        "heading" => TurnDetail::Heading {
            direction: direction(index, data_action)?,
        },
        "move_to" => TurnDetail::MoveTo {
            direction: direction(index, data_action)?,
        },
        "scout" => TurnDetail::Scout {
            direction: direction(index, data_action)?,
            altitude: int_field(answer, extras, "altitude")?,
            resources: string_list(answer, extras, "resources")?,
        },
        "glimpse" => TurnDetail::Glimpse {
            direction: direction(index, data_action)?,
            tiles: parse_report(answer, extras)?,
        },
        "transform" => TurnDetail::Transform {
            inputs: parse_transform_inputs(index, data_action)?,
            kind: str_field(answer, extras, "kind")?.to_string(),
            production: int_field(answer, extras, "production")?,
        },
        "exploit" => TurnDetail::Exploit {
            resource: str_field(index, parameters(index, data_action)?, "resource")?.to_string(),
            amount: int_field(answer, extras, "amount")?,
        },
        "explore" => TurnDetail::Explore {
            resources: parse_explore_resources(answer, extras)?,
        },
        "land" => {
            let params = parameters(index, data_action)?;
            TurnDetail::Land {
                creek: str_field(index, params, "creek")?.to_string(),
                people: int_field(index, params, "people")?,
            }
        }
        "scan" => TurnDetail::Scan {
            biomes: string_list(answer, extras, "biomes")?,
            sites: string_list(answer, extras, "sites")?,
            creeks: string_list(answer, extras, "creeks")?,
        },
        _ => TurnDetail::Unknown,
    })
}

/// Extract `parameters.direction` for the direction-taking action types
///
/// **Private** - shared across echo/heading/move_to/scout/glimpse
fn direction(record: usize, data_action: &Value) -> Result<String, TraceError> {
    Ok(str_field(record, parameters(record, data_action)?, "direction")?.to_string())
}

/// Extract the transform input map, preserving source declaration order
///
/// **Private** - internal helper for parse_detail
fn parse_transform_inputs(record: usize, data_action: &Value) -> Result<Vec<(String, i64)>, TraceError> {
    let params = parameters(record, data_action)?;
    let map = params.as_object().ok_or(TraceError::InvalidField {
        record,
        field: "parameters",
        expected: "an object",
    })?;

    let mut inputs = Vec::with_capacity(map.len());
    for (name, value) in map {
        let amount = value.as_i64().ok_or(TraceError::InvalidField {
            record,
            field: "parameters",
            expected: "an integer amount per resource",
        })?;
        inputs.push((name.clone(), amount));
    }
    Ok(inputs)
}

/// Resolve each glimpse report entry by structural inspection:
/// a list entry is an alternating biome/percent run, a string entry
/// is a bare resource name
///
/// **Private** - internal helper for parse_detail
fn parse_report(record: usize, extras: &Value) -> Result<Vec<TileReport>, TraceError> {
    let report = array_field(record, extras, "report")?;

    let mut tiles = Vec::with_capacity(report.len());
    for entry in report {
        match entry {
            Value::Array(parts) => tiles.push(TileReport::Biomes(parse_biome_run(record, parts)?)),
            Value::String(name) => tiles.push(TileReport::Resource(name.clone())),
            _ => {
                return Err(TraceError::InvalidField {
                    record,
                    field: "report",
                    expected: "a list or a resource name per entry",
                })
            }
        }
    }
    Ok(tiles)
}

/// Split a flat [name, percent, name, percent, ...] run into pairs
///
/// **Private** - internal helper for parse_report
fn parse_biome_run(record: usize, parts: &[Value]) -> Result<Vec<(String, i64)>, TraceError> {
    if parts.len() % 2 != 0 {
        return Err(TraceError::InvalidField {
            record,
            field: "report",
            expected: "an even alternating biome/percent list",
        });
    }

    let mut biomes = Vec::with_capacity(parts.len() / 2);
    for pair in parts.chunks_exact(2) {
        let name = pair[0].as_str().ok_or(TraceError::InvalidField {
            record,
            field: "report",
            expected: "a biome name at even positions",
        })?;
        let percent = pair[1].as_i64().ok_or(TraceError::InvalidField {
            record,
            field: "report",
            expected: "an integer percent at odd positions",
        })?;
        biomes.push((name.to_string(), percent));
    }
    Ok(biomes)
}

/// Extract the explore resource sightings; quantity and difficulty are
/// kept verbatim (they may carry non-numeric condition codes)
///
/// **Private** - internal helper for parse_detail
fn parse_explore_resources(record: usize, extras: &Value) -> Result<Vec<ExploreResource>, TraceError> {
    let entries = array_field(record, extras, "resources")?;

    let mut resources = Vec::with_capacity(entries.len());
    for entry in entries {
        resources.push(ExploreResource {
            name: str_field(record, entry, "resource")?.to_string(),
            quantity: verbatim_field(record, entry, "amount")?,
            difficulty: verbatim_field(record, entry, "cond")?,
        });
    }
    Ok(resources)
}

/// Required field lookup on an object value
///
/// **Private** - internal utility
fn field<'a>(record: usize, value: &'a Value, field: &'static str) -> Result<&'a Value, TraceError> {
    value
        .get(field)
        .ok_or(TraceError::MissingField { record, field })
}

/// Required `parameters` object of an action record
///
/// **Private** - internal utility
fn parameters<'a>(record: usize, data_action: &'a Value) -> Result<&'a Value, TraceError> {
    field(record, data_action, "parameters")
}

/// Required string field
///
/// **Private** - internal utility
fn str_field<'a>(record: usize, value: &'a Value, name: &'static str) -> Result<&'a str, TraceError> {
    field(record, value, name)?
        .as_str()
        .ok_or(TraceError::InvalidField {
            record,
            field: name,
            expected: "a string",
        })
}

/// Required integer field
///
/// **Private** - internal utility
fn int_field(record: usize, value: &Value, name: &'static str) -> Result<i64, TraceError> {
    field(record, value, name)?
        .as_i64()
        .ok_or(TraceError::InvalidField {
            record,
            field: name,
            expected: "an integer",
        })
}

/// Required array field
///
/// **Private** - internal utility
fn array_field<'a>(
    record: usize,
    value: &'a Value,
    name: &'static str,
) -> Result<&'a Vec<Value>, TraceError> {
    field(record, value, name)?
        .as_array()
        .ok_or(TraceError::InvalidField {
            record,
            field: name,
            expected: "an array",
        })
}

/// Required array-of-strings field
///
/// **Private** - internal utility
fn string_list(record: usize, value: &Value, name: &'static str) -> Result<Vec<String>, TraceError> {
    array_field(record, value, name)?
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or(TraceError::InvalidField {
                    record,
                    field: name,
                    expected: "an array of strings",
                })
        })
        .collect()
}

/// String field kept verbatim: strings pass through, numbers render in
/// canonical decimal
///
/// **Private** - internal utility
fn verbatim_field(record: usize, value: &Value, name: &'static str) -> Result<String, TraceError> {
    match field(record, value, name)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(TraceError::InvalidField {
            record,
            field: name,
            expected: "a string or number",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn setup_record() -> Value {
        json!({"data": {"heading": "N", "men": 5, "contracts": [], "budget": 100}})
    }

    #[test]
    fn test_parse_setup_only() {
        let trace = parse_trace(&[setup_record()]).unwrap();
        assert_eq!(trace.setup.heading, "N");
        assert_eq!(trace.setup.men, 5);
        assert!(trace.setup.contracts.is_empty());
        assert_eq!(trace.setup.budget, 100);
        assert!(trace.turns.is_empty());
    }

    #[test]
    fn test_empty_trace_is_missing_setup() {
        assert!(matches!(parse_trace(&[]), Err(TraceError::MissingSetup)));
    }

    #[test]
    fn test_setup_missing_field_is_invalid_setup() {
        let record = json!({"data": {"heading": "N", "men": 5, "budget": 100}});
        assert!(matches!(
            parse_trace(&[record]),
            Err(TraceError::InvalidSetup(_))
        ));
    }

    #[test]
    fn test_trailing_action_without_answer() {
        let records = vec![
            setup_record(),
            json!({"data": {"action": "scan", "parameters": {}}}),
        ];
        assert!(matches!(
            parse_trace(&records),
            Err(TraceError::UnpairedRecord { index: 1 })
        ));
    }

    #[test]
    fn test_unknown_action_type_is_not_an_error() {
        let records = vec![
            setup_record(),
            json!({"data": {"action": "teleport", "parameters": {"x": 1}}}),
            json!({"data": {"status": "ok", "cost": 2, "extras": {}}}),
        ];
        let trace = parse_trace(&records).unwrap();
        assert_eq!(trace.turns[0].detail, TurnDetail::Unknown);
        assert_eq!(trace.turns[0].action_type, "teleport");
        assert_eq!(trace.turns[0].cost, 2);
    }

    #[test]
    fn test_glimpse_report_shapes() {
        let records = vec![
            setup_record(),
            json!({"data": {"action": "glimpse", "parameters": {"direction": "W"}}}),
            json!({"data": {"status": "ok", "cost": 3, "extras": {
                "report": [["BEACH", 60, "OCEAN", 40], "WOOD"]
            }}}),
        ];
        let trace = parse_trace(&records).unwrap();
        let TurnDetail::Glimpse { direction, tiles } = &trace.turns[0].detail else {
            panic!("expected glimpse detail");
        };
        assert_eq!(direction, "W");
        assert_eq!(
            tiles[0],
            TileReport::Biomes(vec![("BEACH".into(), 60), ("OCEAN".into(), 40)])
        );
        assert_eq!(tiles[1], TileReport::Resource("WOOD".into()));
    }

    #[test]
    fn test_glimpse_odd_biome_run_is_invalid() {
        let records = vec![
            setup_record(),
            json!({"data": {"action": "glimpse", "parameters": {"direction": "W"}}}),
            json!({"data": {"status": "ok", "cost": 3, "extras": {"report": [["BEACH", 60, "OCEAN"]]}}}),
        ];
        assert!(matches!(
            parse_trace(&records),
            Err(TraceError::InvalidField { field: "report", .. })
        ));
    }

    #[test]
    fn test_transform_inputs_keep_source_order() {
        let records = vec![
            setup_record(),
            json!({"data": {"action": "transform", "parameters": {"WOOD": 6, "QUARTZ": 2}}}),
            json!({"data": {"status": "ok", "cost": 5, "extras": {"kind": "GLASS", "production": 1}}}),
        ];
        let trace = parse_trace(&records).unwrap();
        let TurnDetail::Transform { inputs, kind, production } = &trace.turns[0].detail else {
            panic!("expected transform detail");
        };
        assert_eq!(inputs, &[("WOOD".to_string(), 6), ("QUARTZ".to_string(), 2)]);
        assert_eq!(kind, "GLASS");
        assert_eq!(*production, 1);
    }

    #[test]
    fn test_missing_typed_field_names_record_and_field() {
        let records = vec![
            setup_record(),
            json!({"data": {"action": "land", "parameters": {"creek": "C1"}}}),
            json!({"data": {"status": "ok", "cost": 3, "extras": {}}}),
        ];
        assert!(matches!(
            parse_trace(&records),
            Err(TraceError::MissingField { record: 1, field: "people" })
        ));
    }

    #[test]
    fn test_explore_keeps_verbatim_quantity() {
        let records = vec![
            setup_record(),
            json!({"data": {"action": "explore", "parameters": {}}}),
            json!({"data": {"status": "ok", "cost": 4, "extras": {"resources": [
                {"resource": "FUR", "amount": "HIGH", "cond": "EASY"},
                {"resource": "FISH", "amount": 12, "cond": "HARSH"}
            ]}}}),
        ];
        let trace = parse_trace(&records).unwrap();
        let TurnDetail::Explore { resources } = &trace.turns[0].detail else {
            panic!("expected explore detail");
        };
        assert_eq!(resources[0].quantity, "HIGH");
        assert_eq!(resources[1].quantity, "12");
        assert_eq!(resources[1].difficulty, "HARSH");
    }
}
