use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_style: Option<String>,
    modal_class: Option<String>,
}

/// Handle открытого диалога: его можно клонировать в обработчики событий
/// и закрыть диалог изнутри.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Стек диалогов дизайнера (импорт таблицы, конвертер макросов, примеры).
///
/// Escape закрывает только верхний диалог (обрабатывается в `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Закрытие на следующем тике: обработчик события ещё выполняется
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Открыть диалог поверх текущих.
    ///
    /// `builder` получает `ModalHandle`, чтобы диалог мог закрыть себя сам;
    /// стиль и класс применяются к поверхности диалога.
    pub fn push_with_frame<F>(
        &self,
        modal_style: Option<String>,
        modal_class: Option<String>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                modal_style,
                modal_class,
            });
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }
}

/// Рендерит стек диалогов в корне приложения (монтируется один раз).
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty())
                {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // Хост живёт всё время работы приложения
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let z_index = 1000 + idx as i32;
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));

                    let view = (entry.builder)(ModalHandle { id, svc });

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=entry.modal_style.clone().unwrap_or_default()
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
