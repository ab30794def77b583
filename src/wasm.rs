//! WebAssembly bindings for Conways.
//!
//! Provides a thin wrapper around [`Universe`] for browser front ends. The
//! front end owns the animation loop: it calls `tick` (or `run`) once per
//! frame and then reads the packed cells, either straight out of wasm
//! memory via `cellsPtr`/`cellsLen` or as a copied `Uint8Array` via
//! `cellsSnapshot`.

use wasm_bindgen::prelude::*;

use crate::{
    compute::{Universe, UniverseStats},
    error::UniverseError,
    schema::{DEFAULT_SIZE, Seed, Shape, UniverseConfig},
};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    // Initialize WASM logger
    wasm_logger::init(wasm_logger::Config::default());
}

fn to_js(e: UniverseError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WebAssembly wrapper for a Game of Life universe.
#[wasm_bindgen]
pub struct WasmUniverse {
    universe: Universe,
    config: UniverseConfig,
}

#[wasm_bindgen]
impl WasmUniverse {
    /// Create an all-dead universe. Missing dimensions default to 64.
    #[wasm_bindgen(constructor)]
    pub fn new(width: Option<u32>, height: Option<u32>) -> Result<WasmUniverse, JsValue> {
        let config = UniverseConfig {
            width: width.unwrap_or(DEFAULT_SIZE),
            height: height.unwrap_or(DEFAULT_SIZE),
            ..Default::default()
        };
        let universe = Universe::from_config(&config).map_err(to_js)?;
        Ok(WasmUniverse { universe, config })
    }

    /// Create a universe from JSON configuration and an optional JSON seed.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(
        config_json: &str,
        seed_json: Option<String>,
    ) -> Result<WasmUniverse, JsValue> {
        let config: UniverseConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config JSON: {e}")))?;

        let mut universe = Universe::from_config(&config).map_err(to_js)?;

        if let Some(seed_json) = seed_json {
            let seed: Seed = serde_json::from_str(&seed_json)
                .map_err(|e| JsValue::from_str(&format!("Invalid seed JSON: {e}")))?;
            seed.apply(&mut universe).map_err(to_js)?;
        }

        Ok(WasmUniverse { universe, config })
    }

    #[wasm_bindgen]
    pub fn width(&self) -> u32 {
        self.universe.width()
    }

    #[wasm_bindgen]
    pub fn height(&self) -> u32 {
        self.universe.height()
    }

    /// Reallocate to new dimensions. All cells become dead.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.universe.resize(width, height).map_err(to_js)
    }

    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, row: u32, col: u32) -> Result<bool, JsValue> {
        self.universe.get_cell(row, col).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, row: u32, col: u32, alive: bool) -> Result<(), JsValue> {
        self.universe.set_cell(row, col, alive).map_err(to_js)
    }

    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), JsValue> {
        self.universe.toggle_cell(row, col).map_err(to_js)
    }

    /// Stamp a named shape (`"glider"`, `"blinker"`, `"block"`, `"pulsar"`)
    /// anchored at (row, col).
    #[wasm_bindgen]
    pub fn stamp(&mut self, row: u32, col: u32, shape: &str) -> Result<(), JsValue> {
        let shape = Shape::from_name(shape)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown shape: {shape}")))?;
        self.universe.stamp(row, col, &shape);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.universe.clear();
    }

    #[wasm_bindgen]
    pub fn random(&mut self) {
        self.universe.random();
    }

    /// Advance one generation.
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.universe.tick();
    }

    /// Advance several generations, e.g. a per-frame speed setting.
    #[wasm_bindgen]
    pub fn run(&mut self, steps: u32) {
        self.universe.run(steps as u64);
    }

    /// Pointer to the packed cells inside wasm memory.
    ///
    /// Only valid until the next call that mutates or resizes the universe.
    #[wasm_bindgen(js_name = cellsPtr)]
    pub fn cells_ptr(&self) -> *const u8 {
        self.universe.cells().as_ptr()
    }

    /// Length of the packed cells in bytes.
    #[wasm_bindgen(js_name = cellsLen)]
    pub fn cells_len(&self) -> usize {
        self.universe.cells().len()
    }

    /// Copy of the packed cells.
    #[wasm_bindgen(js_name = cellsSnapshot)]
    pub fn cells_snapshot(&self) -> Vec<u8> {
        self.universe.cells_snapshot()
    }

    /// Replace the universe with a plaintext pattern.
    ///
    /// On error the universe is unchanged.
    #[wasm_bindgen(js_name = importText)]
    pub fn import_text(&mut self, text: &str) -> Result<(), JsValue> {
        self.universe
            .import_with(text, &self.config.alphabet)
            .map_err(|e| {
                log::warn!("Pattern import failed: {e}");
                to_js(e)
            })
    }

    #[wasm_bindgen(js_name = exportText)]
    pub fn export_text(&self) -> String {
        self.universe.export_with(&self.config.alphabet)
    }

    /// Get population statistics as a JS object.
    #[wasm_bindgen(js_name = getStats)]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        let stats = UniverseStats::from_universe(&self.universe);
        serde_wasm_bindgen::to_value(&stats)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}
