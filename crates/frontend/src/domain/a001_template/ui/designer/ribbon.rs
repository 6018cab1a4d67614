//! Панель форматирования и меню вставки элементов

use super::view_model::DesignerViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_template::element::ChartType;
use contracts::domain::a001_template::palette::{self, CalculationVariant, TableVariant};
use contracts::domain::a001_template::{EditorState, Element, ElementContent};
use leptos::prelude::*;
use std::sync::Arc;

type ElementFactory = Arc<dyn Fn() -> Element + Send + Sync>;

#[derive(Clone)]
struct MenuItem {
    label: &'static str,
    factory: ElementFactory,
}

fn item(label: &'static str, factory: impl Fn() -> Element + Send + Sync + 'static) -> MenuItem {
    MenuItem {
        label,
        factory: Arc::new(factory),
    }
}

fn table_items() -> Vec<MenuItem> {
    TableVariant::all()
        .into_iter()
        .map(|variant| item(variant.display_name(), move || palette::table(variant)))
        .collect()
}

fn chart_items() -> Vec<MenuItem> {
    ChartType::all()
        .into_iter()
        .map(|chart| item(chart.display_name(), move || palette::chart(chart)))
        .collect()
}

fn form_field_items() -> Vec<MenuItem> {
    palette::form_field_kinds()
        .into_iter()
        .filter_map(|kind| {
            palette::form_field(kind)?;
            Some(item(kind.display_name(), move || {
                palette::form_field(kind).unwrap_or_else(palette::text)
            }))
        })
        .collect()
}

fn calculation_items() -> Vec<MenuItem> {
    CalculationVariant::all()
        .into_iter()
        .map(|variant| item(variant.display_name(), move || palette::calculation_field(variant)))
        .collect()
}

/// Адрес картинки спрашиваем у пользователя; пустой адрес даёт заглушку
fn ask_image_src() -> Option<String> {
    let window = web_sys::window()?;
    window
        .prompt_with_message_and_default("Адрес изображения (URL)", "")
        .ok()
        .flatten()
}

/// Выпадающее меню вставки
#[component]
fn InsertMenu(
    vm: DesignerViewModel,
    label: &'static str,
    icon_name: &'static str,
    items: Vec<MenuItem>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let items = StoredValue::new(items);

    view! {
        <div class="ribbon-menu">
            <button
                class="ribbon__button"
                class:ribbon__button--active=move || is_open.get()
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {icon(icon_name)}
                <span>{label}</span>
                {icon("chevron-down")}
            </button>
            <Show when=move || is_open.get()>
                <div class="ribbon-menu__list" on:mouseleave=move |_| is_open.set(false)>
                    {items.get_value().into_iter().map(|menu_item| {
                        let factory = menu_item.factory.clone();
                        view! {
                            <div
                                class="ribbon-menu__item"
                                on:click=move |_| {
                                    vm.insert(factory());
                                    is_open.set(false);
                                }
                            >
                                {menu_item.label}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn FormatButton(
    title: &'static str,
    icon_name: &'static str,
    active: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="ribbon__button ribbon__button--icon"
            class:ribbon__button--active=move || active.get()
            title=title
            on:click=move |_| on_click.run(())
        >
            {icon(icon_name)}
        </button>
    }
}

/// Лента дизайнера: форматирование выделенного текста и вставка элементов
#[component]
pub fn Ribbon(vm: DesignerViewModel) -> impl IntoView {
    let selected_format = Memo::new(move |_| {
        vm.state.with(|s| match s.selected_element().map(|e| &e.content) {
            Some(ElementContent::Text(text)) => {
                Some(text.format.clone())
            }
            _ => None,
        })
    });

    let is_bold = Signal::derive(move || selected_format.with(|f| f.as_ref().is_some_and(|f| f.is_bold())));
    let is_italic =
        Signal::derive(move || selected_format.with(|f| f.as_ref().is_some_and(|f| f.is_italic())));
    let is_underlined = Signal::derive(move || {
        selected_format.with(|f| f.as_ref().is_some_and(|f| f.is_underlined()))
    });
    let align_is = move |align: &'static str| {
        Signal::derive(move || {
            selected_format.with(|f| {
                f.as_ref()
                    .map(|f| f.text_align.as_deref().unwrap_or("left") == align)
                    .unwrap_or(false)
            })
        })
    };

    view! {
        <div class="ribbon">
            <div class="ribbon__group">
                <FormatButton title="Жирный" icon_name="bold" active=is_bold
                    on_click=Callback::new(move |_| vm.format(EditorState::toggle_bold)) />
                <FormatButton title="Курсив" icon_name="italic" active=is_italic
                    on_click=Callback::new(move |_| vm.format(EditorState::toggle_italic)) />
                <FormatButton title="Подчёркнутый" icon_name="underline" active=is_underlined
                    on_click=Callback::new(move |_| vm.format(EditorState::toggle_underline)) />
            </div>
            <div class="ribbon__group">
                <FormatButton title="По левому краю" icon_name="align-left" active=align_is("left")
                    on_click=Callback::new(move |_| vm.format(|s| s.set_text_align("left"))) />
                <FormatButton title="По центру" icon_name="align-center" active=align_is("center")
                    on_click=Callback::new(move |_| vm.format(|s| s.set_text_align("center"))) />
                <FormatButton title="По правому краю" icon_name="align-right" active=align_is("right")
                    on_click=Callback::new(move |_| vm.format(|s| s.set_text_align("right"))) />
            </div>
            <div class="ribbon__group">
                <InsertMenu vm=vm label="Таблица" icon_name="table" items=table_items() />
                <button
                    class="ribbon__button"
                    on:click=move |_| {
                        if let Some(src) = ask_image_src() {
                            vm.insert(palette::image(src.trim()));
                        }
                    }
                >
                    {icon("image")}
                    <span>"Рисунок"</span>
                </button>
                <InsertMenu vm=vm label="Диаграмма" icon_name="bar-chart" items=chart_items() />
                <button class="ribbon__button" on:click=move |_| vm.insert(palette::text())>
                    {icon("type")}
                    <span>"Текст"</span>
                </button>
                <button class="ribbon__button" on:click=move |_| vm.insert(palette::shape())>
                    {icon("square")}
                    <span>"Фигура"</span>
                </button>
            </div>
            <div class="ribbon__group">
                <InsertMenu vm=vm label="Поля формы" icon_name="form-input" items=form_field_items() />
                <InsertMenu vm=vm label="Вычисления" icon_name="calculator" items=calculation_items() />
            </div>
        </div>
    }
}
