use leptos::prelude::*;

/// Modal chrome shared by every mutation workflow.
///
/// The owning screen holds the open/closed signal; workflow state is created
/// when the modal opens and dropped when it closes, so nothing entered in one
/// opening leaks into the next. Clicking the overlay or the close button
/// abandons the workflow.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-header__title">{title.clone()}</h2>
                    <button class="modal-header__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
