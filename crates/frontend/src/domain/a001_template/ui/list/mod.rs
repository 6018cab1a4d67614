use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{TabKey, TEMPLATE_CREATE, TEMPLATE_LIST};
use crate::layout::tabs::{detail_tab_label, tab_label_for_key};
use crate::shared::icons::icon;
use crate::shared::storage::{open_repository, use_designer_config};
use contracts::domain::a001_template::{Template, TemplateId};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub category_icon: &'static str,
    pub element_count: usize,
    pub updated_at: String,
}

impl From<Template> for TemplateRow {
    fn from(t: Template) -> Self {
        Self {
            id: t.id.as_str().to_string(),
            category: t.category.display_name().to_string(),
            category_icon: t.category.icon_name(),
            element_count: t.elements.len(),
            updated_at: format_timestamp(t.updated_at()),
            name: t.name,
        }
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn TemplateList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let config = StoredValue::new(use_designer_config());

    let (items, set_items) = signal::<Vec<TemplateRow>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            // Отдаём кадр, чтобы успел отрисоваться индикатор загрузки
            TimeoutFuture::new(0).await;
            let result = config.with_value(open_repository).and_then(|repo| repo.list());
            match result {
                Ok(templates) => {
                    set_items.set(templates.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    // Перечитываем при каждой активации таба: шаблоны меняются в дизайнере
    Effect::new(move |_| {
        if tabs_store.active.get().as_deref() == Some(TEMPLATE_LIST) {
            fetch();
        }
    });

    let open_create = move || {
        tabs_store.open_tab(TEMPLATE_CREATE, tab_label_for_key(TEMPLATE_CREATE));
    };

    let open_edit = move |row: &TemplateRow| {
        let key = TabKey::TemplateEdit(row.id.clone()).key();
        tabs_store.open_tab(&key, &detail_tab_label(Template::element_name(), &row.name));
    };

    let open_use = move |row: &TemplateRow| {
        let key = TabKey::TemplateUse(row.id.clone()).key();
        tabs_store.open_tab(&key, &detail_tab_label("Заполнение", &row.name));
    };

    let delete = move |row: &TemplateRow| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Удалить шаблон «{}»?", row.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let id = TemplateId::new(row.id.clone());
        match config
            .with_value(open_repository)
            .and_then(|repo| repo.delete(&id))
        {
            Ok(_) => {
                tabs_store.close_tab(&TabKey::TemplateEdit(row.id.clone()).key());
                tabs_store.close_tab(&TabKey::TemplateUse(row.id.clone()).key());
                fetch();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layout-template")}
                    <h1 class="page__title">{Template::list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        " Создать шаблон"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            {move || {
                if loading.get() {
                    return view! {
                        <Flex justify=FlexJustify::Center style="padding: 48px;">
                            <Spinner label="Загрузка шаблонов..." />
                        </Flex>
                    }
                    .into_any();
                }

                let rows = items.get();
                if rows.is_empty() {
                    return view! {
                        <div class="template-list__empty">
                            {icon("file-text")}
                            <h3>"Шаблонов пока нет"</h3>
                            <p>"Создайте первый шаблон документа"</p>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                                {icon("plus")}
                                " Создать шаблон"
                            </Button>
                        </div>
                    }
                    .into_any();
                }

                view! {
                    <div class="template-list__grid">
                        {rows.into_iter().map(|row| {
                            let row = StoredValue::new(row);
                            view! {
                                <Card class="template-card">
                                    <div class="template-card__header">
                                        <span class="template-card__icon">{row.with_value(|r| icon(r.category_icon))}</span>
                                        <div>
                                            <div class="template-card__name">{row.with_value(|r| r.name.clone())}</div>
                                            <div class="template-card__meta">
                                                <Badge appearance=BadgeAppearance::Tint>{row.with_value(|r| r.category.clone())}</Badge>
                                                {row.with_value(|r| format!(" Элементов: {}", r.element_count))}
                                            </div>
                                        </div>
                                    </div>
                                    <div class="template-card__date">
                                        {row.with_value(|r| format!("Изменён: {}", r.updated_at))}
                                    </div>
                                    <Flex gap=FlexGap::Small>
                                        <Button size=ButtonSize::Small on_click=move |_| row.with_value(|r| open_edit(r))>
                                            {icon("edit")}
                                            " Редактировать"
                                        </Button>
                                        <Button size=ButtonSize::Small on_click=move |_| row.with_value(|r| open_use(r))>
                                            {icon("play")}
                                            " Заполнить"
                                        </Button>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| row.with_value(|r| delete(r))
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </Flex>
                                </Card>
                            }
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a001_template::{NewTemplate, TemplateCategory};

    #[test]
    fn test_row_from_template() {
        let now = chrono::Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        let dto = NewTemplate::named("Счёт", TemplateCategory::Invoice);
        let template = Template::new_for_insert(TemplateId::new("t1"), dto, now);

        let row = TemplateRow::from(template);
        assert_eq!(row.id, "t1");
        assert_eq!(row.name, "Счёт");
        assert_eq!(row.category_icon, "receipt");
        assert_eq!(row.element_count, 0);
        assert_eq!(row.updated_at, "05.03.2024 14:07");
    }
}
