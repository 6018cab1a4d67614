use super::view_model::DesignerViewModel;
use crate::shared::excel_importer::{ensure_supported, read_sheet_file, SUPPORTED_EXTENSIONS};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use contracts::shared::tabular::{self, SheetGrid};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Сколько строк показывать в предпросмотре
const PREVIEW_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportSource {
    File,
    Paste,
    Sample,
}

impl ImportSource {
    fn label(&self) -> &'static str {
        match self {
            ImportSource::File => "Файл",
            ImportSource::Paste => "Вставить",
            ImportSource::Sample => "Пример",
        }
    }

    fn all() -> [ImportSource; 3] {
        [ImportSource::File, ImportSource::Paste, ImportSource::Sample]
    }
}

/// Подпись вида «data.csv: строк 12, столбцов 4»
fn grid_summary(grid: &SheetGrid) -> String {
    format!(
        "{}: строк {}, столбцов {}",
        grid.source,
        grid.row_count(),
        grid.col_count()
    )
}

#[component]
fn GridPreview(grid: SheetGrid) -> impl IntoView {
    let hidden = grid.body().len().saturating_sub(PREVIEW_ROWS);
    view! {
        <div class="import-dialog__preview">
            <div class="import-dialog__summary">{grid_summary(&grid)}</div>
            <table class="import-dialog__table">
                <thead>
                    <tr>
                        {grid.headers().iter().map(|h| view! { <th>{h.clone()}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {grid.body().iter().take(PREVIEW_ROWS).map(|row| view! {
                        <tr>
                            {row.iter().map(|cell| view! { <td>{cell.clone()}</td> }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
            {(hidden > 0).then(|| view! {
                <div class="import-dialog__more">{format!("… ещё строк: {}", hidden)}</div>
            })}
        </div>
    }
}

/// Диалог импорта таблицы: файл Excel/CSV, вставка из буфера или пример
#[component]
pub fn ImportDialog(vm: DesignerViewModel, handle: ModalHandle) -> impl IntoView {
    let source = RwSignal::new(ImportSource::File);
    let grid = RwSignal::new(Option::<SheetGrid>::None);
    let error = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);
    let is_importing = RwSignal::new(false);
    let paste_text = RwSignal::new(String::new());
    let latency = vm.config().ui.simulated_latency_ms;

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            return;
        };

        grid.set(None);
        if let Err(e) = ensure_supported(&file.name()) {
            error.set(Some(e));
            return;
        }
        error.set(None);
        is_loading.set(true);
        leptos::task::spawn_local(async move {
            match read_sheet_file(file).await {
                Ok(data) => grid.set(Some(data)),
                Err(e) => error.set(Some(e)),
            }
            is_loading.set(false);
        });
    };

    let handle_parse_paste = move |_| {
        error.set(None);
        match tabular::parse_pasted(&paste_text.get_untracked(), "Буфер обмена") {
            Ok(data) => grid.set(Some(data)),
            Err(e) => {
                grid.set(None);
                error.set(Some(e.to_string()));
            }
        }
    };

    let handle_sample = move |_| {
        error.set(None);
        grid.set(Some(tabular::sample_sheet()));
    };

    let close_handle = handle.clone();
    let handle_cancel = move |_| {
        if !is_importing.get_untracked() {
            close_handle.close();
        }
    };

    let handle_import = move |_| {
        let Some(data) = grid.get_untracked() else {
            return;
        };
        is_importing.set(true);
        let handle = handle.clone();
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(latency).await;
            vm.import_grid(&data);
            is_importing.set(false);
            handle.close();
        });
    };

    view! {
        <div class="import-dialog">
            <div class="modal-header">
                <h3 class="modal-title">"Импорт таблицы"</h3>
                <div class="modal-header-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_cancel
                        disabled=Signal::derive(move || is_importing.get())
                    >
                        {icon("x")}
                        " Закрыть"
                    </Button>
                </div>
            </div>

            <div class="modal-body">
                <div class="import-dialog__tabs">
                    {ImportSource::all().into_iter().map(|s| view! {
                        <button
                            class=move || if source.get() == s {
                                "import-dialog__tab import-dialog__tab--active"
                            } else {
                                "import-dialog__tab"
                            }
                            on:click=move |_| {
                                source.set(s);
                                error.set(None);
                            }
                        >
                            {s.label()}
                        </button>
                    }).collect_view()}
                </div>

                {move || match source.get() {
                    ImportSource::File => view! {
                        <div class="import-dialog__filebar">
                            <label class="button button--primary" for="import-file-input">
                                {icon("upload")}
                                " Выбрать файл"
                            </label>
                            <input
                                id="import-file-input"
                                type="file"
                                accept=SUPPORTED_EXTENSIONS
                                on:change=handle_file_select
                                class="hidden"
                            />
                            <span class="import-dialog__hint">"Excel (.xlsx, .xls) или CSV"</span>
                        </div>
                    }
                    .into_any(),
                    ImportSource::Paste => view! {
                        <div class="form-group">
                            <label>"Скопируйте ячейки из Excel или Google Таблиц и вставьте сюда"</label>
                            <textarea
                                rows="8"
                                prop:value=move || paste_text.get()
                                on:input=move |ev| paste_text.set(event_target_value(&ev))
                            />
                            <Button appearance=ButtonAppearance::Secondary on_click=handle_parse_paste>
                                "Разобрать"
                            </Button>
                        </div>
                    }
                    .into_any(),
                    ImportSource::Sample => view! {
                        <div class="import-dialog__sample">
                            <p>"Небольшой список сотрудников для проверки импорта."</p>
                            <Button appearance=ButtonAppearance::Secondary on_click=handle_sample>
                                {icon("table")}
                                " Загрузить пример"
                            </Button>
                        </div>
                    }
                    .into_any(),
                }}

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                {move || if is_loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small>
                            <Spinner size=SpinnerSize::Tiny/>
                            <span>"Обработка файла..."</span>
                        </Flex>
                    }
                    .into_any()
                } else {
                    grid.get().map(|g| view! { <GridPreview grid=g/> }).into_any()
                }}
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_import
                    disabled=Signal::derive(move || grid.with(Option::is_none) || is_importing.get())
                >
                    {move || if is_importing.get() {
                        view! { <Spinner size=SpinnerSize::Tiny/> " Импорт..." }.into_any()
                    } else {
                        view! { {icon("check")} " Импортировать" }.into_any()
                    }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_summary() {
        let grid = tabular::parse_pasted("Товар\tЦена\nА\t10\nБ\t20", "Буфер обмена").unwrap();
        assert_eq!(grid_summary(&grid), "Буфер обмена: строк 3, столбцов 2");
    }
}
