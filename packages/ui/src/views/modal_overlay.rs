use dioxus::prelude::*;

/// The `modal-window` backdrop holding one modal card with the given id.
/// Clicking the backdrop or pressing Escape calls `on_close`.
#[component]
pub fn ModalOverlay(id: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            id: "modal-window",
            class: "modal-window",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                id: "{id}",
                class: "modal-card",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                {children}
            }
        }
    }
}
