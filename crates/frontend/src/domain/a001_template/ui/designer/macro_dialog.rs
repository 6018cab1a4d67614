use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use contracts::shared::macro_converter;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

const MACRO_PLACEHOLDER: &str = "Sub Calculate()\n    Dim total\n    total = Range(\"A1\").Value * 2\n    MsgBox total\nEnd Sub";

/// Конвертер VBA-макросов в скрипт
#[component]
pub fn MacroDialog(handle: ModalHandle, latency_ms: u32) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let is_converting = RwSignal::new(false);
    let copied = RwSignal::new(false);

    let handle_convert = move |_| {
        error.set(None);
        copied.set(false);
        is_converting.set(true);
        let source = input.get_untracked();
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(latency_ms).await;
            match macro_converter::convert(&source) {
                Ok(script) => output.set(script),
                Err(e) => {
                    output.set(String::new());
                    error.set(Some(e.to_string()));
                }
            }
            is_converting.set(false);
        });
    };

    let handle_copy = move |_| {
        let text = output.get_untracked();
        if text.is_empty() {
            return;
        }
        copy_to_clipboard_with_callback(&text, move || copied.set(true));
    };

    view! {
        <div class="macro-dialog">
            <div class="modal-header">
                <h3 class="modal-title">"Конвертер макросов"</h3>
                <div class="modal-header-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                        {icon("x")}
                        " Закрыть"
                    </Button>
                </div>
            </div>

            <div class="modal-body macro-dialog__body">
                <div class="form-group">
                    <label>"Код VBA"</label>
                    <textarea
                        class="code-editor"
                        rows="12"
                        placeholder=MACRO_PLACEHOLDER
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                </div>

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_convert
                        disabled=Signal::derive(move || is_converting.get())
                    >
                        {move || if is_converting.get() {
                            view! { <Spinner size=SpinnerSize::Tiny/> " Конвертация..." }.into_any()
                        } else {
                            view! { {icon("refresh")} " Конвертировать" }.into_any()
                        }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_copy
                        disabled=Signal::derive(move || output.with(String::is_empty))
                    >
                        {move || if copied.get() {
                            view! { {icon("check")} " Скопировано" }.into_any()
                        } else {
                            view! { {icon("copy")} " Копировать" }.into_any()
                        }}
                    </Button>
                </Flex>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="form-group">
                    <label>"Результат"</label>
                    <textarea
                        class="code-editor"
                        rows="12"
                        readonly=true
                        prop:value=move || output.get()
                    />
                </div>
            </div>
        </div>
    }
}
