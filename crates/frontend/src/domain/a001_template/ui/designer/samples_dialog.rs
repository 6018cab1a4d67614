use super::view_model::DesignerViewModel;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use contracts::domain::a001_template::SampleKind;
use leptos::prelude::*;
use thaw::*;

fn sample_icon(kind: SampleKind) -> &'static str {
    match kind {
        SampleKind::Invoice => "receipt",
        SampleKind::Report => "bar-chart",
        SampleKind::Form => "clipboard",
        SampleKind::LightPole => "calculator",
    }
}

/// Выбор встроенного примера. Текущие элементы холста заменяются.
#[component]
pub fn SamplesDialog(vm: DesignerViewModel, handle: ModalHandle) -> impl IntoView {
    let close_handle = handle.clone();

    view! {
        <div class="samples-dialog">
            <div class="modal-header">
                <h3 class="modal-title">"Загрузить пример"</h3>
                <div class="modal-header-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| close_handle.close()>
                        {icon("x")}
                        " Закрыть"
                    </Button>
                </div>
            </div>
            <div class="modal-body">
                <p class="samples-dialog__hint">"Элементы, схема и скрипт шаблона будут заменены примером."</p>
                <div class="samples-dialog__list">
                    {SampleKind::all().into_iter().map(|kind| {
                        let handle = handle.clone();
                        view! {
                            <button
                                class="samples-dialog__item"
                                on:click=move |_| {
                                    vm.load_sample(kind);
                                    handle.close();
                                }
                            >
                                {icon(sample_icon(kind))}
                                <span>{kind.display_name()}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
