use super::view_model::DesignerViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Редактор JSON-схемы входных данных
#[component]
pub fn SchemaEditor(vm: DesignerViewModel) -> impl IntoView {
    view! {
        <div class="code-view">
            <div class="code-view__header">
                {icon("braces")}
                <span>"JSON-схема входных данных"</span>
            </div>
            {move || vm.schema_error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}
            <textarea
                class="code-view__editor"
                spellcheck="false"
                prop:value=move || vm.schema_text.get()
                on:input=move |ev| vm.set_schema_text(event_target_value(&ev))
            />
        </div>
    }
}

/// Редактор скрипта расчёта с кнопкой «Тест»
#[component]
pub fn ScriptEditor(vm: DesignerViewModel) -> impl IntoView {
    view! {
        <div class="code-view">
            <div class="code-view__header">
                {icon("code")}
                <span>"Скрипт расчёта (Python)"</span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm.run_script_test()
                >
                    {icon("play")}
                    " Тест"
                </Button>
            </div>
            <textarea
                class="code-view__editor"
                spellcheck="false"
                prop:value=move || vm.state.with(|s| s.scripts.calculation.clone())
                on:input=move |ev| vm.set_calculation_script(event_target_value(&ev))
            />
            {move || vm.script_result.get().map(|result| view! {
                <div class="code-view__result">
                    <div class="code-view__result-title">"Результат теста"</div>
                    <pre>{result}</pre>
                </div>
            })}
        </div>
    }
}
