// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================
// Todo el contenido dinámico entra como texto (set_text_content), nunca como
// HTML, así que los datos del backend no pueden inyectar markup.
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom::{append_child, create_element, set_text_content};
use crate::error::{ClientError, ClientResult};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> ClientResult<Self> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> ClientResult<Self> {
        self.attr("id", id)
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Agregar hijo
    pub fn child(self, child: Element) -> ClientResult<Self> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Agregar un hijo `<tag class=..>texto</tag>`
    pub fn text_child(self, tag: &str, class: &str, text: &str) -> ClientResult<Self> {
        let child = ElementBuilder::new(tag)?.class(class).text(text).build();
        self.child(child)
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> ClientResult<Self> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    /// Establecer una propiedad CSS inline
    pub fn style(self, property: &str, value: &str) -> ClientResult<Self> {
        self.html_element()?.style().set_property(property, value)?;
        Ok(self)
    }

    fn html_element(&self) -> ClientResult<&HtmlElement> {
        self.element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| ClientError::Dom("Element is not an HtmlElement".to_string()))
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }

    /// Construir ya convertido al tipo concreto
    pub fn build_as<T: JsCast>(self) -> ClientResult<T> {
        self.element
            .dyn_into::<T>()
            .map_err(|_| ClientError::Dom("Unexpected element type".to_string()))
    }
}
