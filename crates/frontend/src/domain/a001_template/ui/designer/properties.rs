//! Панель свойств выделенного элемента: содержимое, стиль, позиция

use super::view_model::DesignerViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_template::element::{ChartType, TableContent};
use contracts::domain::a001_template::{Element, ElementContent, ElementKind};
use contracts::shared::value::parse_float_or_zero;
use leptos::prelude::*;
use thaw::*;

const FONT_FAMILIES: [&str; 5] = ["Arial", "Times New Roman", "Courier New", "Georgia", "Verdana"];

/// Значение из выделенного элемента (реактивно)
fn selected<T>(vm: DesignerViewModel, read: impl Fn(&Element) -> T + Send + Sync + 'static) -> Signal<T>
where
    T: Default + Clone + Send + Sync + 'static,
{
    Signal::derive(move || {
        vm.state
            .with(|s| s.selected_element().map(&read).unwrap_or_default())
    })
}

fn text_input(
    vm: DesignerViewModel,
    label: &'static str,
    read: impl Fn(&ElementContent) -> String + Send + Sync + 'static,
    write: impl Fn(&mut ElementContent, String) + Send + Sync + Copy + 'static,
) -> AnyView {
    let value = selected(vm, move |e| read(&e.content));
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    vm.update_selected_content(|c| write(c, text));
                }
            />
        </div>
    }
    .into_any()
}

fn text_area(
    vm: DesignerViewModel,
    label: &'static str,
    read: impl Fn(&ElementContent) -> String + Send + Sync + 'static,
    write: impl Fn(&mut ElementContent, String) + Send + Sync + Copy + 'static,
) -> AnyView {
    let value = selected(vm, move |e| read(&e.content));
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                rows="4"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    vm.update_selected_content(|c| write(c, text));
                }
            />
        </div>
    }
    .into_any()
}

fn number_input(
    label: &'static str,
    value: Signal<f64>,
    on_change: impl Fn(f64) + Send + Sync + 'static,
) -> AnyView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="number"
                prop:value=move || value.get().to_string()
                on:input=move |ev| on_change(parse_float_or_zero(&event_target_value(&ev)))
            />
        </div>
    }
    .into_any()
}

fn color_input(
    vm: DesignerViewModel,
    label: &'static str,
    read: impl Fn(&ElementContent) -> String + Send + Sync + 'static,
    write: impl Fn(&mut ElementContent, String) + Send + Sync + Copy + 'static,
) -> AnyView {
    let value = selected(vm, move |e| read(&e.content));
    view! {
        <div class="form-group form-group--inline">
            <label>{label}</label>
            <input
                type="color"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let color = event_target_value(&ev);
                    vm.update_selected_content(|c| write(c, color));
                }
            />
        </div>
    }
    .into_any()
}

fn checkbox_input(
    vm: DesignerViewModel,
    label: &'static str,
    read: impl Fn(&ElementContent) -> bool + Send + Sync + 'static,
    write: impl Fn(&mut ElementContent, bool) + Send + Sync + Copy + 'static,
) -> AnyView {
    let value = selected(vm, move |e| read(&e.content));
    view! {
        <div class="form-group form-group--inline">
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || value.get()
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        vm.update_selected_content(|c| write(c, checked));
                    }
                />
                " "{label}
            </label>
        </div>
    }
    .into_any()
}

fn label_input(vm: DesignerViewModel) -> AnyView {
    text_input(
        vm,
        "Подпись",
        |c| c.field_label().unwrap_or_default().to_string(),
        |c, v| match c {
            ElementContent::TextField(f)
            | ElementContent::NumberField(f)
            | ElementContent::DateField(f)
            | ElementContent::TimeField(f)
            | ElementContent::FileField(f) => f.label = v,
            ElementContent::DropdownField(f) | ElementContent::RadioField(f) => f.label = v,
            ElementContent::CheckboxField(f) => f.label = v,
            ElementContent::CalculationField(f) => f.label = v,
            ElementContent::CurrencyField(f) => f.label = v,
            ElementContent::PercentageField(f) => f.label = v,
            _ => {}
        },
    )
}

fn with_table(c: &ElementContent) -> Option<&TableContent> {
    match c {
        ElementContent::Table(t) => Some(t),
        _ => None,
    }
}

fn table_cells_editor(vm: DesignerViewModel) -> AnyView {
    // Сетка перестраивается только при смене размеров
    let dims = Memo::new(move |_| {
        vm.state.with(|s| {
            s.selected_element()
                .and_then(|e| with_table(&e.content))
                .map(|t| (t.row_count(), t.col_count()))
                .unwrap_or((0, 0))
        })
    });

    view! {
        <div class="form-group">
            <label>"Ячейки"</label>
            <div class="table-cells-editor">
                {move || {
                    let (rows, cols) = dims.get();
                    (0..rows).map(|row| view! {
                        <div class="table-cells-editor__row">
                            {(0..cols).map(|col| {
                                let value = selected(vm, move |e| {
                                    with_table(&e.content).map(|t| t.cell(row, col).to_string()).unwrap_or_default()
                                });
                                view! {
                                    <input
                                        type="text"
                                        prop:value=move || value.get()
                                        on:input=move |ev| {
                                            let text = event_target_value(&ev);
                                            vm.update_selected_content(|c| {
                                                if let ElementContent::Table(t) = c {
                                                    t.set_cell(row, col, text);
                                                }
                                            });
                                        }
                                    />
                                }
                            }).collect_view()}
                        </div>
                    }).collect_view()
                }}
            </div>
        </div>
    }
    .into_any()
}

fn content_editor(vm: DesignerViewModel, tag: &str) -> AnyView {
    match tag {
        "text" => text_area(
            vm,
            "Текст",
            |c| match c {
                ElementContent::Text(t) => t.text.clone(),
                _ => String::new(),
            },
            |c, v| {
                if let ElementContent::Text(t) = c {
                    t.text = v;
                }
            },
        ),
        "table" => {
            let rows = selected(vm, |e| with_table(&e.content).map(|t| t.row_count() as f64).unwrap_or_default());
            let cols = selected(vm, |e| with_table(&e.content).map(|t| t.col_count() as f64).unwrap_or_default());
            view! {
                {number_input("Строк", rows, move |n| vm.update_selected_content(|c| {
                    if let ElementContent::Table(t) = c {
                        t.rows = Some(n.clamp(1.0, 50.0) as u32);
                    }
                }))}
                {number_input("Столбцов", cols, move |n| vm.update_selected_content(|c| {
                    if let ElementContent::Table(t) = c {
                        t.cols = Some(n.clamp(1.0, 20.0) as u32);
                    }
                }))}
                {checkbox_input(vm, "Строка заголовка",
                    |c| with_table(c).is_some_and(|t| t.headers),
                    |c, v| if let ElementContent::Table(t) = c { t.headers = v; })}
                {checkbox_input(vm, "Итоговая строка",
                    |c| with_table(c).is_some_and(|t| t.footer),
                    |c, v| if let ElementContent::Table(t) = c { t.footer = v; })}
                {table_cells_editor(vm)}
            }
            .into_any()
        }
        "chart" => {
            let value = selected(vm, |e| match &e.content {
                ElementContent::Chart(chart) => chart.chart_type().to_string(),
                _ => String::new(),
            });
            view! {
                <div class="form-group">
                    <label>"Тип диаграммы"</label>
                    <select
                        prop:value=move || value.get()
                        on:change=move |ev| {
                            let chart_type = event_target_value(&ev);
                            vm.update_selected_content(|c| {
                                if let ElementContent::Chart(chart) = c {
                                    chart.chart_type = Some(chart_type);
                                }
                            });
                        }
                    >
                        {ChartType::all().into_iter().map(|t| view! {
                            <option value=t.as_str()>{t.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
            }
            .into_any()
        }
        "image" => view! {
            {text_input(vm, "Адрес (src)",
                |c| match c { ElementContent::Image(i) => i.src.clone(), _ => String::new() },
                |c, v| if let ElementContent::Image(i) = c { i.src = v; })}
            {text_input(vm, "Альтернативный текст",
                |c| match c { ElementContent::Image(i) => i.alt.clone().unwrap_or_default(), _ => String::new() },
                |c, v| if let ElementContent::Image(i) = c { i.alt = Some(v); })}
        }
        .into_any(),
        "textField" | "numberField" | "dateField" | "timeField" | "fileField" => view! {
            {label_input(vm)}
            {text_input(vm, "Подсказка",
                |c| match c {
                    ElementContent::TextField(f) | ElementContent::NumberField(f)
                    | ElementContent::DateField(f) | ElementContent::TimeField(f)
                    | ElementContent::FileField(f) => f.placeholder.clone().unwrap_or_default(),
                    _ => String::new(),
                },
                |c, v| match c {
                    ElementContent::TextField(f) | ElementContent::NumberField(f)
                    | ElementContent::DateField(f) | ElementContent::TimeField(f)
                    | ElementContent::FileField(f) => f.placeholder = Some(v),
                    _ => {}
                })}
        }
        .into_any(),
        "dropdownField" | "radioField" => view! {
            {label_input(vm)}
            {text_area(vm, "Варианты (по одному в строке)",
                |c| match c {
                    ElementContent::DropdownField(f) | ElementContent::RadioField(f) => f.options.join("\n"),
                    _ => String::new(),
                },
                |c, v| match c {
                    ElementContent::DropdownField(f) | ElementContent::RadioField(f) => {
                        f.options = v.lines().map(str::to_string).collect();
                    }
                    _ => {}
                })}
        }
        .into_any(),
        "checkboxField" => view! {
            {label_input(vm)}
            {checkbox_input(vm, "Отмечен по умолчанию",
                |c| matches!(c, ElementContent::CheckboxField(f) if f.checked),
                |c, v| if let ElementContent::CheckboxField(f) = c { f.checked = v; })}
        }
        .into_any(),
        "calculationField" => view! {
            {label_input(vm)}
            {text_input(vm, "Формула",
                |c| match c { ElementContent::CalculationField(f) => f.formula.clone(), _ => String::new() },
                |c, v| if let ElementContent::CalculationField(f) = c { f.formula = v; })}
        }
        .into_any(),
        "currencyField" => view! {
            {label_input(vm)}
            {text_input(vm, "Символ валюты",
                |c| match c { ElementContent::CurrencyField(f) => f.symbol.clone(), _ => String::new() },
                |c, v| if let ElementContent::CurrencyField(f) = c { f.symbol = v; })}
            {text_input(vm, "Значение",
                |c| match c { ElementContent::CurrencyField(f) => f.value.clone(), _ => String::new() },
                |c, v| if let ElementContent::CurrencyField(f) = c { f.value = v; })}
        }
        .into_any(),
        "percentageField" => view! {
            {label_input(vm)}
            {text_input(vm, "Значение",
                |c| match c { ElementContent::PercentageField(f) => f.value.clone(), _ => String::new() },
                |c, v| if let ElementContent::PercentageField(f) = c { f.value = v; })}
        }
        .into_any(),
        "shape" => view! {
            <p class="properties__hint">"Внешний вид фигуры настраивается на вкладке «Стиль»"</p>
        }
        .into_any(),
        _ => {
            let raw = selected(vm, |e| match &e.content {
                ElementContent::Unknown { raw, .. } => {
                    serde_json::to_string_pretty(raw).unwrap_or_default()
                }
                _ => String::new(),
            });
            view! {
                <div class="form-group">
                    <label>"Содержимое (только чтение)"</label>
                    <pre class="properties__raw">{move || raw.get()}</pre>
                </div>
            }
            .into_any()
        }
    }
}

fn style_editor(vm: DesignerViewModel, tag: &str) -> AnyView {
    match tag {
        "text" => {
            let font_size = selected(vm, |e| match &e.content {
                ElementContent::Text(t) => t.format.font_size(),
                _ => 0.0,
            });
            let font_family = selected(vm, |e| match &e.content {
                ElementContent::Text(t) => t.format.font_family.clone().unwrap_or_default(),
                _ => String::new(),
            });
            view! {
                <div class="form-group">
                    <label>"Шрифт"</label>
                    <select
                        prop:value=move || font_family.get()
                        on:change=move |ev| {
                            let family = event_target_value(&ev);
                            vm.update_selected_content(|c| {
                                if let ElementContent::Text(t) = c {
                                    t.format.font_family = (!family.is_empty()).then_some(family);
                                }
                            });
                        }
                    >
                        <option value="">"По умолчанию"</option>
                        {FONT_FAMILIES.into_iter().map(|f| view! { <option value=f>{f}</option> }).collect_view()}
                    </select>
                </div>
                {number_input("Размер шрифта, px", font_size, move |n| vm.update_selected_content(|c| {
                    if let ElementContent::Text(t) = c {
                        t.format.font_size = Some(n.max(1.0));
                    }
                }))}
                {color_input(vm, "Цвет текста",
                    |c| match c {
                        ElementContent::Text(t) => t.format.color.clone().unwrap_or_else(|| "#000000".to_string()),
                        _ => String::new(),
                    },
                    |c, v| if let ElementContent::Text(t) = c { t.format.color = Some(v); })}
            }
            .into_any()
        }
        "table" => {
            let border = selected(vm, |e| with_table(&e.content).map(|t| t.border_width()).unwrap_or_default());
            view! {
                {number_input("Толщина границы, px", border, move |n| vm.update_selected_content(|c| {
                    if let ElementContent::Table(t) = c {
                        t.border_width = Some(n.max(0.0));
                    }
                }))}
                {color_input(vm, "Цвет границы",
                    |c| with_table(c).map(|t| t.border_color().to_string()).unwrap_or_default(),
                    |c, v| if let ElementContent::Table(t) = c { t.border_color = Some(v); })}
            }
            .into_any()
        }
        "shape" => {
            let border = selected(vm, |e| match &e.content {
                ElementContent::Shape(s) => s.border_width(),
                _ => 0.0,
            });
            let radius = selected(vm, |e| match &e.content {
                ElementContent::Shape(s) => s.border_radius(),
                _ => 0.0,
            });
            view! {
                {color_input(vm, "Заливка",
                    |c| match c {
                        ElementContent::Shape(s) if s.background_color() != "transparent" => s.background_color().to_string(),
                        _ => "#ffffff".to_string(),
                    },
                    |c, v| if let ElementContent::Shape(s) = c { s.background_color = Some(v); })}
                <button
                    class="btn btn-link"
                    on:click=move |_| vm.update_selected_content(|c| {
                        if let ElementContent::Shape(s) = c {
                            s.background_color = Some("transparent".to_string());
                        }
                    })
                >
                    "Без заливки"
                </button>
                {number_input("Толщина границы, px", border, move |n| vm.update_selected_content(|c| {
                    if let ElementContent::Shape(s) = c {
                        s.border_width = Some(n.max(0.0));
                    }
                }))}
                {color_input(vm, "Цвет границы",
                    |c| match c { ElementContent::Shape(s) => s.border_color().to_string(), _ => String::new() },
                    |c, v| if let ElementContent::Shape(s) = c { s.border_color = Some(v); })}
                {number_input("Скругление, px", radius, move |n| vm.update_selected_content(|c| {
                    if let ElementContent::Shape(s) = c {
                        s.border_radius = Some(n.max(0.0));
                    }
                }))}
            }
            .into_any()
        }
        _ => view! {
            <p class="properties__hint">"Для этого элемента нет настроек стиля"</p>
        }
        .into_any(),
    }
}

fn position_editor(vm: DesignerViewModel) -> AnyView {
    let x = selected(vm, |e| e.position.x);
    let y = selected(vm, |e| e.position.y);
    let width = selected(vm, |e| e.size.width);
    let height = selected(vm, |e| e.size.height);

    view! {
        {number_input("X", x, move |n| vm.update_selected_position(|p| p.x = n))}
        {number_input("Y", y, move |n| vm.update_selected_position(|p| p.y = n))}
        {number_input("Ширина", width, move |n| vm.update_selected_size(|s| s.width = n.max(1.0)))}
        {number_input("Высота", height, move |n| vm.update_selected_size(|s| s.height = n.max(1.0)))}
    }
    .into_any()
}

#[component]
pub fn PropertiesPanel(vm: DesignerViewModel) -> impl IntoView {
    let active_tab = RwSignal::new("content");

    // Форма перестраивается только при смене выделения, не на каждый ввод
    let selection = Memo::new(move |_| {
        vm.state.with(|s| {
            s.selected_element()
                .map(|e| (e.id.clone(), e.content.type_tag().to_string()))
        })
    });

    view! {
        <div class="properties">
            <div class="properties__header">"Свойства"</div>
            {move || match selection.get() {
                None => view! {
                    <p class="properties__hint">"Выделите элемент на холсте"</p>
                }
                .into_any(),
                Some((_, tag)) => {
                    let title = ElementKind::from_tag(&tag)
                        .map(|k| k.display_name().to_string())
                        .unwrap_or_else(|| tag.clone());
                    let tag = StoredValue::new(tag);
                    view! {
                        <div class="properties__title">{title}</div>
                        <Flex gap=FlexGap::Small>
                            <Button
                                size=ButtonSize::Small
                                appearance=move || if active_tab.get() == "content" { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                on_click=move |_| active_tab.set("content")
                            >
                                "Содержимое"
                            </Button>
                            <Button
                                size=ButtonSize::Small
                                appearance=move || if active_tab.get() == "style" { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                on_click=move |_| active_tab.set("style")
                            >
                                "Стиль"
                            </Button>
                            <Button
                                size=ButtonSize::Small
                                appearance=move || if active_tab.get() == "position" { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                                on_click=move |_| active_tab.set("position")
                            >
                                "Позиция"
                            </Button>
                        </Flex>

                        <div class="properties__body">
                            <div style:display=move || if active_tab.get() == "content" { "block" } else { "none" }>
                                {tag.with_value(|t| content_editor(vm, t))}
                            </div>
                            <div style:display=move || if active_tab.get() == "style" { "block" } else { "none" }>
                                {tag.with_value(|t| style_editor(vm, t))}
                            </div>
                            <div style:display=move || if active_tab.get() == "position" { "block" } else { "none" }>
                                {position_editor(vm)}
                            </div>
                        </div>

                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.delete_selected()>
                            {icon("trash")}
                            " Удалить элемент"
                        </Button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
