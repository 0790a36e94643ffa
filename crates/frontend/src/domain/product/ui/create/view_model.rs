use contracts::domain::product::draft::{
    remove_staged_at, screen_image_batch, BatchPolicy, ProductDraft, SubmissionState, SubmitError,
};
use futures::future::join_all;
use leptos::prelude::*;

use crate::domain::product::store::{use_catalog, CatalogContext};
use crate::shared::storage::upload_file_progress;
use crate::shared::toast::{use_toasts, ToastService};

/// Any invalid file in a dropped batch rejects the whole batch.
const STAGING_POLICY: BatchPolicy = BatchPolicy::RejectBatch;

/// Storage folder all product images land in
const STORAGE_FOLDER: &str = "products";

/// An image picked by the user but not yet uploaded: the file handle plus an
/// object-URL for the thumbnail.
#[derive(Clone)]
pub struct StagedImage {
    pub file: web_sys::File,
    pub preview_url: String,
}

/// ViewModel for the product creation form. Drives the submission workflow
/// as an explicit state machine: Idle -> Validating -> Uploading ->
/// Committing -> Idle. Failures return to Idle with the entered values
/// intact; only success resets the form.
#[derive(Clone, Copy)]
pub struct AddProductViewModel {
    pub draft: RwSignal<ProductDraft>,
    pub staged: RwSignal<Vec<StagedImage>, LocalStorage>,
    pub state: RwSignal<SubmissionState>,
    pub stage_error: RwSignal<Option<String>>,
    pub upload_progress: RwSignal<Vec<f64>>,
    pub catalog: CatalogContext,
    toasts: ToastService,
}

impl AddProductViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(ProductDraft::default()),
            staged: RwSignal::new_local(Vec::new()),
            state: RwSignal::new(SubmissionState::default()),
            stage_error: RwSignal::new(None),
            upload_progress: RwSignal::new(Vec::new()),
            catalog: use_catalog(),
            toasts: use_toasts(),
        }
    }

    /// Screen a dropped batch against the image allow-set and stage what the
    /// policy admits. One combined message covers every rejected file.
    pub fn stage_files(&self, files: web_sys::FileList) {
        let batch: Vec<web_sys::File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        if batch.is_empty() {
            return;
        }

        let mime_types: Vec<String> = batch.iter().map(|file| file.type_()).collect();
        let screening = screen_image_batch(&mime_types, STAGING_POLICY);
        self.stage_error.set(screening.error_message());

        let mut accepted = Vec::with_capacity(screening.accepted.len());
        for index in screening.accepted {
            let file = batch[index].clone();
            let preview_url =
                web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
            accepted.push(StagedImage { file, preview_url });
        }
        if !accepted.is_empty() {
            self.staged.update(|list| list.extend(accepted));
        }
    }

    /// Pure local-state edit: splice by index, revoke the thumbnail URL,
    /// confirm. No network effect.
    pub fn remove_image(&self, index: usize) {
        let preview_url = self
            .staged
            .with_untracked(|list| list.get(index).map(|image| image.preview_url.clone()));
        let Some(preview_url) = preview_url else {
            return;
        };

        self.staged.update(|list| {
            remove_staged_at(list, index);
        });
        let _ = web_sys::Url::revoke_object_url(&preview_url);
        self.toasts.success("Image removed successfully!");
    }

    /// One submission attempt. Validation short-circuits with a single
    /// message; uploads fan out concurrently and are collected positionally
    /// after every one settles; commit appends to the shared collection and
    /// resets the form.
    pub fn submit(&self, on_created: Callback<()>) {
        if self.state.get_untracked().is_busy() {
            return;
        }
        self.state.set(SubmissionState::Validating);

        let draft = self.draft.get_untracked();
        let staged = self.staged.get_untracked();

        if let Err(message) = draft.validate(staged.len()) {
            self.toasts.error(message);
            self.state.set(SubmissionState::Idle);
            return;
        }

        self.state.set(SubmissionState::Uploading);
        self.upload_progress.set(vec![0.0; staged.len()]);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let now_ms = js_sys::Date::now() as i64;

            let uploads = staged.iter().enumerate().map(|(index, image)| {
                // time prefix + index + original name avoids collisions
                // within one submission
                let name = format!("{}_{}_{}", now_ms, index, image.file.name());
                let progress = vm.upload_progress;
                let file = image.file.clone();
                async move {
                    upload_file_progress(&file, STORAGE_FOLDER, &name, move |percent| {
                        progress.try_update(|slots| {
                            if let Some(slot) = slots.get_mut(index) {
                                *slot = percent;
                            }
                        });
                    })
                    .await
                }
            });

            let results = join_all(uploads).await;

            // Upload order is preserved regardless of completion order. The
            // first failure fails the whole submission; siblings that
            // already landed stay in storage.
            let mut urls = Vec::with_capacity(results.len());
            for result in results {
                match result {
                    Ok(url) => urls.push(url),
                    Err(e) => {
                        log::error!("Image upload failed: {e}");
                        vm.toasts.error(SubmitError::Upload(e).to_string());
                        vm.state.try_set(SubmissionState::Idle);
                        return;
                    }
                }
            }

            vm.state.try_set(SubmissionState::Committing);

            match draft.assemble(urls, now_ms) {
                Ok(product) => {
                    vm.catalog.add_product(product);
                    vm.reset_form();
                    vm.toasts.success("Product added successfully!");
                    vm.state.try_set(SubmissionState::Idle);
                    on_created.run(());
                }
                Err(message) => {
                    log::error!("Commit failed: {message}");
                    vm.toasts
                        .error(SubmitError::Upload(message.to_string()).to_string());
                    vm.state.try_set(SubmissionState::Idle);
                }
            }
        });
    }

    /// Back to defaults after a successful commit
    fn reset_form(&self) {
        self.draft.try_set(ProductDraft::default());
        if let Some(staged) = self.staged.try_update(std::mem::take) {
            for image in staged {
                let _ = web_sys::Url::revoke_object_url(&image.preview_url);
            }
        }
        self.upload_progress.try_set(Vec::new());
        self.stage_error.try_set(None);
    }
}
