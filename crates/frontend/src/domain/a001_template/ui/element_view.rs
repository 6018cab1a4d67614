//! Отрисовка элемента по модели `RenderedElement` (холст и предпросмотр)

use crate::shared::icons::icon;
use contracts::shared::preview::{
    FieldControl, RenderedBody, RenderedCell, RenderedElement, UNKNOWN_ELEMENT,
};
use leptos::prelude::*;

pub fn body_view(body: RenderedBody) -> AnyView {
    match body {
        RenderedBody::Text { text, style } => view! {
            <div class="element-text" style=style>{text}</div>
        }
        .into_any(),
        RenderedBody::Table { rows, cell_style } => view! {
            <table class="element-table">
                <tbody>
                    {rows.into_iter().map(|row| {
                        let cell_style = cell_style.clone();
                        view! {
                            <tr>
                                {row.into_iter().map(|cell| cell_view(cell, cell_style.clone())).collect_view()}
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
        RenderedBody::Chart { chart_type, caption } => view! {
            <div class="element-chart" data-chart-type=chart_type>
                {icon("bar-chart")}
                <span>{caption}</span>
            </div>
        }
        .into_any(),
        RenderedBody::Image { src, alt } => view! {
            <img class="element-image" src=src alt=alt />
        }
        .into_any(),
        RenderedBody::ImagePlaceholder => view! {
            <div class="element-image element-image--empty">
                {icon("image")}
                <span>"Изображение"</span>
            </div>
        }
        .into_any(),
        RenderedBody::Shape => view! { <div class="element-shape"></div> }.into_any(),
        RenderedBody::Field { label, control } => view! {
            <div class="element-field">
                <label class="element-field__label">{label}</label>
                {control_view(control)}
            </div>
        }
        .into_any(),
        RenderedBody::Unknown { type_tag } => view! {
            <div class="element-unknown" title=type_tag>{UNKNOWN_ELEMENT}</div>
        }
        .into_any(),
    }
}

fn cell_view(cell: RenderedCell, style: String) -> AnyView {
    if cell.header {
        view! { <th style=style>{cell.text}</th> }.into_any()
    } else {
        view! { <td style=style>{cell.text}</td> }.into_any()
    }
}

fn control_view(control: FieldControl) -> AnyView {
    match control {
        FieldControl::Input {
            input_type,
            placeholder,
            value,
        } => view! {
            <input type=input_type placeholder=placeholder prop:value=value readonly=true />
        }
        .into_any(),
        FieldControl::Select { options } => view! {
            <select>
                {options.into_iter().map(|o| view! { <option>{o}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FieldControl::Radio { options } => view! {
            <div class="element-field__options">
                {options.into_iter().map(|o| view! {
                    <label><input type="radio" disabled=true />" "{o}</label>
                }).collect_view()}
            </div>
        }
        .into_any(),
        FieldControl::Checkbox { checked } => view! {
            <input type="checkbox" prop:checked=checked disabled=true />
        }
        .into_any(),
        FieldControl::Output { text } => view! {
            <output class="element-field__output">{text}</output>
        }
        .into_any(),
        FieldControl::Affixed {
            prefix,
            value,
            suffix,
        } => view! {
            <div class="element-field__affixed">
                {prefix.map(|p| view! { <span>{p}</span> })}
                <input type="text" prop:value=value readonly=true />
                {suffix.map(|s| view! { <span>{s}</span> })}
            </div>
        }
        .into_any(),
    }
}

/// Абсолютно позиционированный блок без интерактива (предпросмотр)
pub fn static_element_view(element: RenderedElement) -> AnyView {
    view! {
        <div class="preview-element" style=element.box_style data-element-id=element.id>
            {body_view(element.body)}
        </div>
    }
    .into_any()
}
