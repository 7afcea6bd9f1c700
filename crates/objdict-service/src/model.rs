//! Model service: aggregate reads, shallow listing, write passthrough and
//! class generation.

use objdict_codegen::{ClassGenerator, CodegenError};
use objdict_core::entities::{FieldRecord, ModelRecord, UserRecord};
use objdict_core::mapping::translate_all;
use objdict_core::views::{FieldView, ModelSummary, ModelView, UserView};
use objdict_core::{CommandRepository, Conditions, QueryRepository};
use uuid::Uuid;

use crate::traits::{CodeService, GenericService};

/// Filter key tying a field record to its model.
pub const FIELD_MODEL_KEY: &str = "model_id";

/// Composes model views from independent model, field and user stores.
///
/// Holds no locks and no cache. The three reads behind [`Self::get_by_id`]
/// are separate store calls with no shared snapshot, so a concurrent writer
/// can be observed halfway (new model row, old field rows).
#[derive(Debug, Clone)]
pub struct ModelService<MC, MQ, FQ, UQ> {
    model_commands: MC,
    model_queries: MQ,
    field_queries: FQ,
    user_queries: UQ,
    generator: ClassGenerator,
}

impl<MC, MQ, FQ, UQ> ModelService<MC, MQ, FQ, UQ> {
    /// Service with the default C# generator.
    pub const fn new(model_commands: MC, model_queries: MQ, field_queries: FQ, user_queries: UQ) -> Self {
        Self {
            model_commands,
            model_queries,
            field_queries,
            user_queries,
            generator: ClassGenerator::new(),
        }
    }

    /// Replace the class generator (whitespace options).
    #[must_use]
    pub fn with_generator(mut self, generator: ClassGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Class definition that fails on names or types C# cannot accept.
    ///
    /// # Errors
    ///
    /// Returns `CodegenError::MalformedMetadata` for the first bad name.
    pub fn try_class_definition(&self, view: &ModelView) -> Result<String, CodegenError> {
        self.generator.try_generate(&view.name, &view.fields)
    }
}

impl<MC, MQ, FQ, UQ, E> GenericService<ModelView> for ModelService<MC, MQ, FQ, UQ>
where
    MC: CommandRepository<ModelRecord, Error = E>,
    MQ: QueryRepository<ModelRecord, Error = E>,
    FQ: QueryRepository<FieldRecord, Error = E>,
    UQ: QueryRepository<UserRecord, Error = E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Summary = ModelSummary;
    type Error = E;

    /// Model with its fields (store order) and its owner.
    fn get_by_id(&self, id: &Uuid) -> Result<ModelView, E> {
        let model = self.model_queries.get_by_id(id)?;

        let conditions = Conditions::single(FIELD_MODEL_KEY, id);
        let fields = self.field_queries.get_all(&conditions)?;
        let user = self.user_queries.get_by_id(&model.user_id)?;

        tracing::debug!(%id, fields = fields.len(), user = %user.id, "assembled model view");

        let mut view = ModelView::from(model);
        view.fields = translate_all::<_, FieldView, _>(fields);
        view.user = Some(UserView::from(user));
        Ok(view)
    }

    /// Models matching `conditions`, without fields or owner.
    fn get_all(&self, conditions: &Conditions) -> Result<Vec<ModelSummary>, E> {
        let models = self.model_queries.get_all(conditions)?;
        Ok(translate_all(models))
    }

    fn create(&self, view: &ModelView) -> Result<(), E> {
        tracing::debug!(id = %view.id, name = %view.name, "creating model");
        self.model_commands.create(&ModelRecord::from(view))
    }

    fn update(&self, view: &ModelView) -> Result<(), E> {
        tracing::debug!(id = %view.id, name = %view.name, "updating model");
        self.model_commands.update(&ModelRecord::from(view))
    }

    fn delete(&self, id: &Uuid) -> Result<(), E> {
        tracing::debug!(%id, "deleting model");
        self.model_commands.delete(id)
    }
}

impl<MC, MQ, FQ, UQ> CodeService<ModelView> for ModelService<MC, MQ, FQ, UQ> {
    fn get_class_definition(&self, view: &ModelView) -> String {
        self.generator.generate_view(view)
    }
}
