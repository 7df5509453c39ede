// ============================================================================
// ALERT VIEW - Banner descartable al inicio de .container
// ============================================================================

use web_sys::Element;

use crate::dom::{append_child, on_click, prepend_child, query_selector, remove_element, ElementBuilder};
use crate::error::ClientResult;
use crate::utils::constants::MAIN_CONTAINER_SELECTOR;
use crate::viewmodels::AlertKind;

/// Insertar el banner. `None` si la página no tiene `.container`.
pub fn render_alert(kind: AlertKind, message: &str) -> ClientResult<Option<Element>> {
    let Some(container) = query_selector(MAIN_CONTAINER_SELECTOR) else {
        return Ok(None);
    };

    let banner = ElementBuilder::new("div")?
        .class(kind.css_class())
        .attr("role", "alert")?
        .text(message)
        .build();

    let close = ElementBuilder::new("button")?
        .class("btn-close")
        .attr("type", "button")?
        .attr("data-bs-dismiss", "alert")?
        .attr("aria-label", "Close")?
        .build();

    {
        let banner = banner.clone();
        on_click(&close, move |_| remove_element(&banner))?;
    }
    append_child(&banner, &close)?;
    prepend_child(&container, &banner)?;

    Ok(Some(banner))
}
