mod binder;
mod config;
mod dom;
mod error;
mod modal;
mod models;
mod routes;
mod state;

pub use crate::binder::{CardBinder, CardPage};
pub use crate::config::PageConfig;
pub use crate::dom::{bind_card_page, CardPageHandle, DomPage};
pub use crate::error::{PageError, PageErrorKind, PageResult};
pub use crate::modal::{BootstrapModal, Modal};
pub use crate::models::{CardId, CardSnapshot, Trigger, TriggerKind};
pub use crate::routes::CardRoutes;
pub use crate::state::{DeleteFlow, EditFlow, FlowState, FormState};

use leptos::logging::error;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = PageConfig::new();
    match bind_card_page(&config) {
        Ok(handle) => handle.forget(),
        // The page stays usable; only the edit/delete shortcuts are missing.
        Err(e) => error!("card page not bound: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_types_compose() {
        let routes = CardRoutes::new(&PageConfig::default().base_path);
        let id = CardId::parse("42").expect("valid card id");
        let mut edit = EditFlow::new(&routes);
        let form = edit.arm(
            &routes,
            &id,
            CardSnapshot {
                title: "Groceries".to_string(),
                content: "Milk, eggs".to_string(),
            },
        );
        assert_eq!(form.action, "/my-cards/edit_card/42/");
        assert_eq!(edit.state(), FlowState::Armed);
    }
}
