use super::view_model::TemplateCreateViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::tab_labels::TabKey;
use crate::shared::icons::icon;
use crate::shared::storage::use_designer_config;
use contracts::domain::a001_template::{Template, TemplateCategory, TemplateId};
use leptos::prelude::*;

#[component]
pub fn TemplateCreate(tab_key: String, on_cancel: Callback<()>) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = TemplateCreateViewModel::new(use_designer_config());
    let vm_clone = vm.clone();

    let tab_key = StoredValue::new(tab_key);
    let on_created = Callback::new(move |(id, name): (TemplateId, String)| {
        let edit_key = TabKey::TemplateEdit(id.as_str().to_string()).key();
        let title = detail_tab_label(Template::element_name(), &name);
        tab_key.with_value(|key| tabs_store.replace_tab(key, &edit_key, &title));
    });

    view! {
        <div class="details-container template-create">
            <div class="details-header">
                <h3>"Новый шаблон"</h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="template-name">"Название шаблона"<span class="required">" *"</span></label>
                    <input
                        type="text"
                        id="template-name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Например: Счёт на оплату"
                    />
                </div>

                <div class="form-group">
                    <label for="template-category">"Категория"</label>
                    <select
                        id="template-category"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().category
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.category = event_target_value(&ev));
                            }
                        }
                    >
                        {TemplateCategory::selectable().into_iter().map(|c| {
                            view! { <option value=c.as_str().to_string()>{c.display_name().to_string()}</option> }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.create_command(on_created)
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()()
                    }
                >
                    {icon("plus")}
                    "Создать и открыть дизайнер"
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Отмена"
                </button>
            </div>
        </div>
    }
}
