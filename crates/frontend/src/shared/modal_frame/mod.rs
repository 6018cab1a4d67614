use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Оверлей + поверхность диалога. Заголовок и кнопки рисует сам диалог.
#[component]
pub fn ModalFrame(
    /// Закрытие по клику на оверлей
    on_close: Callback<()>,
    #[prop(optional)]
    z_index: Option<i32>,
    /// Дополнительный класс для `div.modal`
    #[prop(optional)]
    modal_class: String,
    /// Дополнительный стиль для `div.modal`
    #[prop(optional)]
    modal_style: String,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Закрываем, только если и нажатие, и отпускание были на самом оверлее
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let modal_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=modal_class
                style=format!("position: relative; {modal_style}")
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
