//! Trace-to-document transformation.
//!
//! Pure builder functions from the typed trace to the output element
//! tree, composed bottom-up. Each builder returns its subtree by value,
//! so every variant mapping can be exercised in isolation. The caller
//! owns the returned tree; nothing here touches I/O.

use crate::trace::{Setup, TileReport, Trace, Turn, TurnDetail};
use crate::xml::Element;
use log::debug;

/// Build the complete `log` document from a parsed trace
///
/// **Public** - main entry point for the transform
pub fn build_document(trace: &Trace) -> Element {
    debug!("building document for {} turns", trace.turns.len());
    Element::new("log")
        .child(context_element(&trace.setup))
        .child(Element::new("actions").children(trace.turns.iter().map(turn_element)))
}

/// Build the `context` subtree from the setup record
///
/// **Public** - exercised directly by property tests
pub fn context_element(setup: &Setup) -> Element {
    let contracts = Element::new("contracts").children(setup.contracts.iter().map(|contract| {
        Element::new("contract")
            .child(Element::new("amount").text(contract.amount.to_string()))
            .child(Element::new("resource").attr("name", &contract.resource))
    }));

    Element::new("context").child(
        Element::new("data")
            .child(Element::new("direction").attr("dir", &setup.heading))
            .child(Element::new("men").text(setup.men.to_string()))
            // The container is always emitted, even with zero contracts
            .child(contracts)
            .child(Element::new("budget").text(setup.budget.to_string())),
    )
}

/// Build one `turn` subtree: the action with its type-specific children
/// and the answer with cost and extras
///
/// **Public** - exercised directly by property tests
pub fn turn_element(turn: &Turn) -> Element {
    let action = Element::new("action")
        .attr("type", &turn.action_type)
        .children(action_children(&turn.detail));

    let answer = Element::new("answer")
        .attr("status", &turn.status)
        .child(Element::new("cost").text(turn.cost.to_string()))
        .child(Element::new("extras").children(extras_children(&turn.detail)));

    Element::new("turn").child(action).child(answer)
}

/// Type-specific children of the `action` element
///
/// **Private** - one arm per variant
fn action_children(detail: &TurnDetail) -> Vec<Element> {
    match detail {
        TurnDetail::Echo { direction, .. }
        | TurnDetail::Heading { direction }
        | TurnDetail::MoveTo { direction }
        | TurnDetail::Scout { direction, .. }
        | TurnDetail::Glimpse { direction, .. } => {
            vec![Element::new("direction").attr("dir", direction)]
        }
        TurnDetail::Transform { inputs, .. } => inputs
            .iter()
            .map(|(name, amount)| {
                Element::new("resource")
                    .attr("name", name)
                    .child(Element::new("amount").text(amount.to_string()))
            })
            .collect(),
        TurnDetail::Exploit { resource, .. } => {
            vec![Element::new("resource").attr("name", resource)]
        }
        TurnDetail::Land { creek, people } => vec![
            Element::new("creek").text(creek),
            Element::new("people").text(people.to_string()),
        ],
        TurnDetail::Explore { .. } | TurnDetail::Scan { .. } | TurnDetail::Unknown => Vec::new(),
    }
}

/// Type-specific children of the `extras` element
///
/// **Private** - one arm per variant
fn extras_children(detail: &TurnDetail) -> Vec<Element> {
    match detail {
        TurnDetail::Echo { found, range, .. } => vec![
            Element::new("found").text(found),
            Element::new("range").text(range.to_string()),
        ],
        TurnDetail::Scout {
            altitude,
            resources,
            ..
        } => {
            let mut children = vec![Element::new("altitude").text(altitude.to_string())];
            children.extend(
                resources
                    .iter()
                    .map(|name| Element::new("resource").attr("name", name)),
            );
            children
        }
        TurnDetail::Glimpse { tiles, .. } => tiles
            .iter()
            .enumerate()
            .map(|(index, report)| tile_element(index + 1, report))
            .collect(),
        TurnDetail::Transform {
            kind, production, ..
        } => vec![Element::new("resource")
            .attr("name", kind)
            .child(Element::new("amount").text(production.to_string()))],
        TurnDetail::Exploit { amount, .. } => {
            vec![Element::new("amount").text(amount.to_string())]
        }
        TurnDetail::Explore { resources } => resources
            .iter()
            .map(|resource| {
                Element::new("resource")
                    .attr("name", &resource.name)
                    .child(Element::new("quantity").text(&resource.quantity))
                    .child(Element::new("difficulty").text(&resource.difficulty))
            })
            .collect(),
        TurnDetail::Scan {
            biomes,
            sites,
            creeks,
        } => vec![
            Element::new("biomes")
                .children(biomes.iter().map(|name| Element::new("biome").text(name))),
            // One merged container: emergency sites first, then landing
            // creeks, always present even when both lists are empty.
            Element::new("sites")
                .children(sites.iter().map(|name| Element::new("emergency").text(name)))
                .children(creeks.iter().map(|name| Element::new("landing").text(name))),
        ],
        TurnDetail::Heading { .. }
        | TurnDetail::MoveTo { .. }
        | TurnDetail::Land { .. }
        | TurnDetail::Unknown => Vec::new(),
    }
}

/// One glimpse `tile` element; `range` is the 1-based tile position
///
/// **Private** - internal helper for extras_children
fn tile_element(range: usize, report: &TileReport) -> Element {
    let tile = Element::new("tile").attr("range", range.to_string());
    match report {
        TileReport::Biomes(biomes) => tile.children(biomes.iter().map(|(name, percent)| {
            Element::new("biome")
                .attr("percent", percent.to_string())
                .text(name)
        })),
        TileReport::Resource(name) => tile.child(Element::new("resource").attr("name", name)),
    }
}
