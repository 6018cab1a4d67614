use super::view_model::{error_for, field_value, TemplateUseViewModel, UseTab};
use crate::domain::a001_template::ui::element_view::static_element_view;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::print::print_page;
use crate::shared::storage::use_designer_config;
use contracts::shared::form_schema::{FieldWidget, FormField};
use contracts::shared::preview::{page_style, render_page, RenderMode};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

fn field_input(vm: TemplateUseViewModel, field: FormField) -> AnyView {
    let name = StoredValue::new(field.name.clone());
    let widget = StoredValue::new(field.widget.clone());
    let text = {
        let field = field.clone();
        move || vm.form_data.with(|d| field.input_text(d))
    };
    let on_input = move |ev: leptos::ev::Event| {
        let value = widget.with_value(|w| field_value(w, &event_target_value(&ev)));
        name.with_value(|n| vm.set_value(n, value));
    };

    match &field.widget {
        FieldWidget::Checkbox => {
            let field = field.clone();
            view! {
                <input
                    type="checkbox"
                    prop:checked=move || vm.form_data.with(|d| field.is_checked(d))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        name.with_value(|n| vm.set_value(n, Value::Bool(checked)));
                    }
                />
            }
            .into_any()
        }
        FieldWidget::TextArea => view! {
            <textarea rows="4" prop:value=text on:input=on_input/>
        }
        .into_any(),
        FieldWidget::Select { options } => view! {
            <select prop:value=text on:change=on_input>
                <option value="">"— выберите —"</option>
                {options.iter().map(|o| view! { <option value=o.clone()>{o.clone()}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FieldWidget::Unsupported { type_name } => view! {
            <div class="template-use__unsupported">
                {format!("Тип поля «{}» не поддерживается", type_name)}
            </div>
        }
        .into_any(),
        other => {
            let input_type = other.input_type().unwrap_or("text");
            let (min, max) = match other {
                FieldWidget::Number { minimum, maximum, .. } => {
                    (minimum.map(|v| v.to_string()), maximum.map(|v| v.to_string()))
                }
                _ => (None, None),
            };
            view! {
                <input
                    type=input_type
                    step=other.step()
                    min=min
                    max=max
                    prop:value=text
                    on:input=on_input
                />
            }
            .into_any()
        }
    }
}

#[component]
fn SchemaForm(vm: TemplateUseViewModel) -> impl IntoView {
    let fields = vm
        .template
        .with_untracked(|t| t.as_ref().map(|t| (t.schema.has_properties(), t.schema.fields())));
    let Some((has_properties, fields)) = fields else {
        return ().into_any();
    };

    if !has_properties || fields.is_empty() {
        return view! {
            <div class="info-box">"Для шаблона не задана схема входных данных."</div>
        }
        .into_any();
    }

    view! {
        <div class="details-form template-use__form">
            {fields.into_iter().map(|field| {
                let name = field.name.clone();
                let label = field.label.clone();
                let required = field.required;
                let description = field.description.clone();
                view! {
                    <div class="form-group">
                        <label>
                            {label}
                            {required.then(|| view! { <span class="required">" *"</span> })}
                        </label>
                        {field_input(vm, field)}
                        {description.map(|d| view! { <small class="form-group__hint">{d}</small> })}
                        {move || vm.field_errors.with(|errors| error_for(errors, &name)).map(|e| view! {
                            <small class="form-group__error">{e}</small>
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
        <div class="details-actions">
            <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.refresh_preview()>
                {icon("refresh")}
                " Обновить предпросмотр"
            </Button>
        </div>
    }
    .into_any()
}

#[component]
fn DocumentPreview(vm: TemplateUseViewModel) -> impl IntoView {
    let style = page_style(&vm.config().canvas);

    view! {
        <div class="template-use__preview">
            <div class="preview-page" style=style>
                {move || {
                    let elements = vm
                        .template
                        .with(|t| t.as_ref().map(|t| t.elements.clone()).unwrap_or_default());
                    vm.calculated.with(|data| render_page(&elements, RenderMode::Preview(data)))
                        .into_iter()
                        .map(static_element_view)
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Заполнение шаблона: форма по схеме и предпросмотр документа
#[component]
pub fn TemplateUse(id: String, tab_key: String, on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = TemplateUseViewModel::new(use_designer_config());
    vm.load(id, &tab_key, tabs_store);

    let tab_class = move |tab: UseTab| {
        if vm.active_tab.get() == tab {
            "template-use__tab template-use__tab--active"
        } else {
            "template-use__tab"
        }
    };

    view! {
        <div class="template-use">
            {move || vm.error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            {move || {
                if vm.loading.get() {
                    return view! {
                        <Flex justify=FlexJustify::Center>
                            <Spinner/>
                        </Flex>
                    }
                    .into_any();
                }

                let Some(name) = vm.template.with(|t| t.as_ref().map(|t| t.name.clone())) else {
                    return view! {
                        <div class="template-use__missing">
                            {icon("alert-triangle")}
                            <h3>"Шаблон не найден"</h3>
                            <p>"Возможно, он был удалён."</p>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                                "Закрыть"
                            </Button>
                        </div>
                    }
                    .into_any();
                };

                view! {
                    <div class="page__header">
                        <div class="page__header-left">
                            {icon("file-text")}
                            <h1 class="page__title">{name}</h1>
                        </div>
                        <div class="page__header-right">
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| print_page()>
                                {icon("printer")}
                                " Экспорт в PDF"
                            </Button>
                        </div>
                    </div>

                    <div class="template-use__tabs">
                        <button class=move || tab_class(UseTab::Form) on:click=move |_| vm.show_form()>
                            {icon("form-input")}
                            " Форма"
                        </button>
                        <button class=move || tab_class(UseTab::Preview) on:click=move |_| vm.show_preview()>
                            {icon("eye")}
                            " Предпросмотр"
                        </button>
                    </div>

                    <div style:display=move || if vm.active_tab.get() == UseTab::Form { "block" } else { "none" }>
                        <SchemaForm vm=vm/>
                    </div>
                    <div style:display=move || if vm.active_tab.get() == UseTab::Preview { "block" } else { "none" }>
                        <DocumentPreview vm=vm/>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
