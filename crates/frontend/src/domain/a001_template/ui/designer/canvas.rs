use super::view_model::DesignerViewModel;
use crate::domain::a001_template::ui::element_view::body_view;
use contracts::domain::a001_template::{ElementId, Position};
use contracts::shared::preview::{page_style, render_page, RenderMode};
use leptos::ev;
use leptos::prelude::*;

fn pointer(ev: &ev::MouseEvent) -> Position {
    Position::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Холст: страница с элементами, выделение и перетаскивание мышью
#[component]
pub fn DesignerCanvas(vm: DesignerViewModel) -> impl IntoView {
    let canvas = vm.config().canvas;
    let style = page_style(&canvas);

    let on_mouse_move = move |ev: ev::MouseEvent| vm.drag_to(pointer(&ev));
    let on_mouse_up = move |_: ev::MouseEvent| vm.end_drag();

    // Клик по пустому месту снимает выделение
    let on_background_down = move |ev: ev::MouseEvent| {
        if let (Some(t), Some(ct)) = (ev.target(), ev.current_target()) {
            if t == ct {
                vm.select(None);
            }
        }
    };

    view! {
        <div
            class="designer-canvas"
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_up
            on:mouseleave=on_mouse_up
        >
            <div class="designer-canvas__page" style=style on:mousedown=on_background_down>
                {move || {
                    let (rendered, selected) = vm.state.with(|s| {
                        (
                            render_page(s.elements(), RenderMode::Canvas),
                            s.selected_id().map(|id| id.to_string()),
                        )
                    });

                    rendered.into_iter().map(|element| {
                        let is_selected = selected.as_deref() == Some(element.id.as_str());
                        let id = ElementId::new(element.id.clone());
                        view! {
                            <div
                                class="designer-canvas__element"
                                class:designer-canvas__element--selected=is_selected
                                style=element.box_style
                                on:mousedown=move |ev: ev::MouseEvent| {
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                    vm.begin_drag(&id, pointer(&ev));
                                }
                            >
                                {body_view(element.body)}
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
