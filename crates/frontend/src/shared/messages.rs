//! User-facing strings (Arabic UI)

pub const CONFIRM_DELETE: &str = "هل أنت متأكد من الحذف؟";
pub const CONFIRM_DELETE_PRODUCT: &str = "هل أنت متأكد من حذف هذا المنتج؟";
pub const PRODUCT_DELETED: &str = "تم حذف المنتج بنجاح";
pub const DELETE_FAILED: &str = "حدث خطأ في الحذف";
pub const GENERIC_ERROR: &str = "حدث خطأ";
pub const EDIT_NOT_READY: &str = "وظيفة التعديل قيد التطوير";
