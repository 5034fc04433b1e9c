//! QR code modal with a download link for the embedded image.

use leptos::prelude::*;

use crate::state::plant_table::QrModal;

#[component]
pub fn QrModalView(#[prop(into)] modal: Signal<QrModal>, on_close: Callback<()>) -> impl IntoView {
    move || {
        let (code, body) = match modal.get() {
            QrModal::Closed => return None,
            QrModal::Available { code, image } => {
                let url = image.data_url();
                let file_name = image.download_name(&code);
                let alt = format!("Código QR de la planta {code}");
                let body = view! {
                    <img class="qr-modal__image" src=url.clone() alt=alt />
                    <a class="btn btn--primary qr-modal__download" href=url download=file_name>
                        "Descargar código QR"
                    </a>
                }
                .into_any();
                (code, body)
            }
            QrModal::Unavailable { code } => {
                let body = view! { <p class="qr-modal__error">"No se pudo cargar el código QR."</p> }.into_any();
                (code, body)
            }
        };
        Some(view! {
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div class="dialog qr-modal" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                    <button class="dialog__close" aria-label="Cerrar" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    <h2>"Código QR de la planta"</h2>
                    <p>{format!("Escanee este código para consultar la planta {code} en Plant Tracker.")}</p>
                    {body}
                    <p class="qr-modal__hint">
                        "Utilice este código QR para acceder y actualizar rápidamente la información de la planta en el campo."
                    </p>
                </div>
            </div>
        })
    }
}
