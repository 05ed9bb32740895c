// User-facing texts of the catalog page. The page speaks pt-BR only.

pub const LOAD_FAILED: &str = "Erro ao carregar produtos";
pub const SAVE_FAILED: &str = "Erro ao salvar produto";
pub const DELETE_FAILED: &str = "Erro ao excluir produto";

pub const CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este produto?";

pub const PRODUCT_CREATED: &str = "Produto cadastrado com sucesso!";
pub const PRODUCT_UPDATED: &str = "Produto atualizado com sucesso!";
pub const PRODUCT_DELETED: &str = "Produto excluído com sucesso!";

pub const FORM_TITLE_CREATE: &str = "Cadastrar Produto";
pub const FORM_TITLE_EDIT: &str = "Editar Produto";
pub const SUBMIT_CREATE: &str = "Cadastrar";
pub const SUBMIT_UPDATE: &str = "Atualizar";
pub const SUBMIT_BUSY: &str = "Salvando...";

pub const EMPTY_LIST: &str = "Nenhum produto cadastrado.";
pub const EMPTY_LIST_HINT: &str = "Use o formulário para adicionar o primeiro produto!";
