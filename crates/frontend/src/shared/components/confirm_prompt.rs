use leptos::prelude::*;

use crate::shared::session::use_session;

/// Modal yes/no prompt driven by the screen's session
#[component]
pub fn ConfirmPrompt() -> impl IntoView {
    let session = use_session();

    move || {
        session.confirm.get().map(|request| {
            view! {
                <div class="modal-backdrop">
                    <div class="modal" role="dialog">
                        <p class="modal__message">{request.message}</p>
                        <div class="modal__actions">
                            <button class="button button--secondary" on:click=move |_| session.answer(false)>
                                "Отмена"
                            </button>
                            <button class="button button--primary" on:click=move |_| session.answer(true)>
                                "Подтвердить"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
