use wasm_bindgen::prelude::*;

use super::js_message;
use crate::scoring::{Score, Scorer};

#[wasm_bindgen(inline_js = "
    export function score_password(scorer, candidate) {
        const estimate = globalThis[scorer];
        if (typeof estimate !== 'function') {
            throw new Error(`global ${scorer} is not a function`);
        }
        return estimate(candidate).score;
    }
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn score_password(scorer: &str, candidate: &str) -> Result<JsValue, JsValue>;
}

/// Scores through a global JS function returning `{ score }`
pub struct JsScorer {
    function: String,
}

impl JsScorer {
    pub fn new(function: &str) -> Self {
        Self {
            function: function.to_string(),
        }
    }
}

impl Scorer for JsScorer {
    /// A throwing scorer still answers, with the minimum score
    fn score(&self, candidate: &str) -> Score {
        match score_password(&self.function, candidate) {
            Ok(raw) => Score::from_f64(raw.as_f64().unwrap_or(f64::NAN)),
            Err(e) => {
                log::error!("Scorer `{}` failed: {}", self.function, js_message(&e));
                Score::MIN
            }
        }
    }
}
