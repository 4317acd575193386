use emoscope::{AnalyticsDeriver, ClassificationResult};
use wasm_bindgen::prelude::*;

/// Browser-side entry point for dashboard pages.
///
/// Wraps the core deriver so a page can hand over the classifier result it
/// received (e.g. from navigation state) and get back the full analytics
/// object as a plain JS value.
#[wasm_bindgen]
pub struct DashboardDeriver {
    inner: AnalyticsDeriver,
}

#[wasm_bindgen]
impl DashboardDeriver {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DashboardDeriver {
        DashboardDeriver {
            inner: AnalyticsDeriver::new(),
        }
    }

    /// Derive dashboard analytics from a classifier result object.
    ///
    /// `null`/`undefined` or an object that doesn't match the classifier
    /// payload shape falls back to the default result — the dashboard always
    /// gets something to render.
    #[wasm_bindgen]
    pub fn derive(&self, result: JsValue) -> JsValue {
        let parsed: Option<ClassificationResult> = if result.is_null() || result.is_undefined() {
            None
        } else {
            match serde_wasm_bindgen::from_value(result) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("emoscope: unusable classifier result, using fallback: {}", e)
                            .into(),
                    );
                    None
                }
            }
        };

        let analytics = self.inner.derive(parsed.as_ref());
        serde_wasm_bindgen::to_value(&analytics).unwrap_or(JsValue::NULL)
    }
}

impl Default for DashboardDeriver {
    fn default() -> Self {
        Self::new()
    }
}
