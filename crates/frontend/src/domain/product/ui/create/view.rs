use contracts::domain::product::aggregate::ProductStatus;
use contracts::domain::product::draft::{SubmissionState, VALID_IMAGE_TYPES};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::view_model::AddProductViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Modal form for creating a new product: fields, staged images, submission.
#[component]
#[allow(non_snake_case)]
pub fn AddProductModal(on_close: Callback<()>) -> impl IntoView {
    let vm = AddProductViewModel::new();

    let handle_file_input = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                vm.stage_files(files);
            }
            // allow re-picking the same file
            input.set_value("");
        }
    };

    let handle_submit = move |_| {
        vm.submit(Callback::new(move |_| on_close.run(())));
    };

    view! {
        <Modal title="Add Product".to_string() on_close=on_close>
            <div class="details-form">
                <div class="form-group">
                    <label for="product_title">{"Product Title"}</label>
                    <input
                        type="text"
                        id="product_title"
                        prop:value=move || vm.draft.get().title
                        on:input=move |ev| {
                            vm.draft.update(|d| d.title = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="product_description">{"Product Description"}</label>
                    <textarea
                        id="product_description"
                        rows="5"
                        prop:value=move || vm.draft.get().description
                        on:input=move |ev| {
                            vm.draft.update(|d| d.description = event_target_value(&ev));
                        }
                        placeholder="Limited markup is allowed; tags are stripped on save"
                    ></textarea>
                </div>

                <div class="form-group">
                    <label>{"Product Images"}</label>
                    {move || {
                        let staged = vm.staged.get();
                        if staged.is_empty() {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <div class="uploaded-files">
                                    {staged.into_iter().enumerate().map(|(index, image)| {
                                        let container_class = if index == 0 {
                                            "image-container image-container--primary"
                                        } else {
                                            "image-container"
                                        };
                                        view! {
                                            <div class={container_class}>
                                                <img src={image.preview_url.clone()} alt={image.file.name()} />
                                                <button
                                                    type="button"
                                                    class="image-container__remove"
                                                    on:click=move |_| vm.remove_image(index)
                                                >
                                                    {icon("x-circle")}
                                                </button>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }
                    }}
                    <label class="upload-zone">
                        {icon("upload")}
                        <span>{"Add images"}</span>
                        <input
                            type="file"
                            multiple
                            accept={VALID_IMAGE_TYPES.join(",")}
                            style="display: none;"
                            on:change=handle_file_input
                        />
                    </label>
                    {move || match vm.stage_error.get() {
                        Some(message) => view! { <div class="error">{message}</div> }.into_any(),
                        None => view! {
                            <div class="upload-zone__hint">
                                {format!("Valid Image Types: {}", VALID_IMAGE_TYPES.join(", "))}
                            </div>
                        }.into_any(),
                    }}
                </div>

                <div class="form-group">
                    <label>{"Status"}</label>
                    <div class="status-choices">
                        {ProductStatus::ALL.into_iter().map(|status| {
                            view! {
                                <label class="status-choice">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || vm.draft.get().status == status
                                        on:change=move |_| {
                                            vm.draft.update(|d| d.status = status);
                                        }
                                    />
                                    <span>{status.as_str()}</span>
                                </label>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="rating_rate">{"Rating Rate"}</label>
                        <input
                            type="number"
                            id="rating_rate"
                            step="0.1"
                            prop:value=move || vm.draft.get().rating_rate
                            on:input=move |ev| {
                                vm.draft.update(|d| d.rating_rate = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="rating_count">{"Rating Count"}</label>
                        <input
                            type="number"
                            id="rating_count"
                            prop:value=move || vm.draft.get().rating_count
                            on:input=move |ev| {
                                vm.draft.update(|d| d.rating_count = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="category">{"Category"}</label>
                        <input
                            type="text"
                            id="category"
                            list="category-options"
                            prop:value=move || vm.draft.get().category
                            on:input=move |ev| {
                                vm.draft.update(|d| d.category = event_target_value(&ev));
                            }
                        />
                        <datalist id="category-options">
                            {move || vm.catalog.facets().categories.into_iter().map(|value| {
                                view! { <option value={value}></option> }
                            }).collect_view()}
                        </datalist>
                    </div>
                    <div class="form-group">
                        <label for="inventory">{"Inventory"}</label>
                        <input
                            type="text"
                            id="inventory"
                            list="inventory-options"
                            prop:value=move || vm.draft.get().inventory
                            on:input=move |ev| {
                                vm.draft.update(|d| d.inventory = event_target_value(&ev));
                            }
                        />
                        <datalist id="inventory-options">
                            {move || vm.catalog.facets().inventory.into_iter().map(|value| {
                                view! { <option value={value}></option> }
                            }).collect_view()}
                        </datalist>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product_type">{"Type"}</label>
                        <input
                            type="text"
                            id="product_type"
                            list="type-options"
                            prop:value=move || vm.draft.get().product_type
                            on:input=move |ev| {
                                vm.draft.update(|d| d.product_type = event_target_value(&ev));
                            }
                        />
                        <datalist id="type-options">
                            {move || vm.catalog.facets().types.into_iter().map(|value| {
                                view! { <option value={value}></option> }
                            }).collect_view()}
                        </datalist>
                    </div>
                    <div class="form-group">
                        <label for="vendor">{"Vendor"}</label>
                        <input
                            type="text"
                            id="vendor"
                            list="vendor-options"
                            prop:value=move || vm.draft.get().vendor
                            on:input=move |ev| {
                                vm.draft.update(|d| d.vendor = event_target_value(&ev));
                            }
                        />
                        <datalist id="vendor-options">
                            {move || vm.catalog.facets().vendors.into_iter().map(|value| {
                                view! { <option value={value}></option> }
                            }).collect_view()}
                        </datalist>
                    </div>
                </div>

                <div class="form-group">
                    <label for="price">{"Product Price"}</label>
                    <input
                        type="number"
                        id="price"
                        step="0.01"
                        prop:value=move || vm.draft.get().price
                        on:input=move |ev| {
                            vm.draft.update(|d| d.price = event_target_value(&ev));
                        }
                    />
                </div>

                {move || {
                    if vm.state.get() == SubmissionState::Uploading {
                        view! {
                            <div class="upload-progress">
                                {vm.upload_progress.get().into_iter().enumerate().map(|(index, percent)| {
                                    view! {
                                        <div class="upload-progress__row">
                                            <span>{format!("Image {}", index + 1)}</span>
                                            <progress max="100" value={format!("{percent:.0}")}></progress>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                <div class="modal-footer">
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        {"Cancel"}
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || vm.state.get().is_busy()
                        on:click=handle_submit
                    >
                        {move || match vm.state.get() {
                            SubmissionState::Idle => "Add Product",
                            SubmissionState::Validating => "Validating...",
                            SubmissionState::Uploading => "Uploading...",
                            SubmissionState::Committing => "Saving...",
                        }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
