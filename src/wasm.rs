//! WASM bindings for the drawing surface.
//!
//! ```javascript
//! import init, { WasmGrader, scenarioIds } from 'wiregrade';
//!
//! await init();
//!
//! const grader = new WasmGrader('delta-delta-240');
//! const result = JSON.parse(grader.validate(JSON.stringify(connections)));
//! // { passed: false, score: 85.71428571428571, errors: ["Incomplete: BUS_S_n, T1_X2"] }
//! ```

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::scenario::{catalog, find, Scenario};
use crate::wiring::parse_connections;

/// One scenario, ready to grade wiring handed over as JSON.
#[wasm_bindgen]
pub struct WasmGrader {
    scenario: Scenario,
}

#[wasm_bindgen]
impl WasmGrader {
    /// Load a scenario of the catalog by id.
    #[wasm_bindgen(constructor)]
    pub fn new(scenario_id: &str) -> Result<WasmGrader, JsValue> {
        let scenario = find(scenario_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGrader { scenario })
    }

    /// Scenario title.
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.scenario.title.clone()
    }

    /// Scenario instructions.
    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        self.scenario.description.clone()
    }

    /// Grade a JSON list of wires, returning the result as JSON.
    pub fn validate(&self, wiring_json: &str) -> Result<String, JsValue> {
        let connections = parse_connections(wiring_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let result = self.scenario.validate(&connections);
        result.to_json(false).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Every terminal id the surface should draw.
    pub fn terminals(&self) -> Array {
        self.scenario.terminals()
            .iter()
            .map(|t| JsValue::from_str(t.as_str()))
            .collect()
    }
}

/// Ids of every scenario in the catalog, in exam order.
#[wasm_bindgen(js_name = scenarioIds)]
pub fn scenario_ids() -> Array {
    catalog()
        .iter()
        .map(|s| JsValue::from_str(&s.id))
        .collect()
}
