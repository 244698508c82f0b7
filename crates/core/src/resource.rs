//! The record types served by the API and the user-facing messages attached
//! to every operation on them.
//!
//! Messages are returned verbatim in the `mensagem` field of response bodies,
//! so their text is part of the public contract.

/// One of the three record types exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Client,
    Vehicle,
    SalesOrder,
}

/// A write operation on a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Create,
    Update,
    Remove,
}

/// Message catalogue for one resource.
///
/// A write either succeeds or is `rejected`. A statement that touched no
/// row and a statement the database refused share the rejected message:
/// callers cannot tell "no such row" from "write failed". Only listing has
/// a failure message of its own.
#[derive(Debug)]
pub struct Messages {
    pub list_failed: &'static str,
    pub created: &'static str,
    pub create_rejected: &'static str,
    pub updated: &'static str,
    pub update_rejected: &'static str,
    pub removed: &'static str,
    pub remove_rejected: &'static str,
}

impl Messages {
    pub fn succeeded(&self, op: WriteOp) -> &'static str {
        match op {
            WriteOp::Create => self.created,
            WriteOp::Update => self.updated,
            WriteOp::Remove => self.removed,
        }
    }

    pub fn rejected(&self, op: WriteOp) -> &'static str {
        match op {
            WriteOp::Create => self.create_rejected,
            WriteOp::Update => self.update_rejected,
            WriteOp::Remove => self.remove_rejected,
        }
    }
}

static CLIENT_MESSAGES: Messages = Messages {
    list_failed: "Não foi possível acessar a listagem de clientes",
    created: "Cliente cadastrado com sucesso!",
    create_rejected: "Erro ao cadastrar o cliente. Entre em contato com o administrador do sistema.",
    updated: "Cliente atualizado com sucesso!",
    update_rejected: "Erro ao atualizar o cliente. Entre em contato com o administrador do sistema.",
    removed: "Cliente removido com sucesso!",
    remove_rejected: "Erro ao remover o cliente. Entre em contato com o administrador do sistema.",
};

static VEHICLE_MESSAGES: Messages = Messages {
    list_failed: "Não foi possível acessar a listagem de carros",
    created: "Carro cadastrado com sucesso!",
    create_rejected: "Erro ao cadastrar o carro. Entre em contato com o administrador do sistema.",
    updated: "Carro atualizado com sucesso!",
    update_rejected: "Erro ao atualizar o carro. Entre em contato com o administrador do sistema.",
    removed: "Carro removido com sucesso!",
    remove_rejected: "Erro ao remover o carro. Entre em contato com o administrador do sistema.",
};

static SALES_ORDER_MESSAGES: Messages = Messages {
    list_failed: "Não foi possível acessar a listagem de pedidos de venda",
    created: "Pedido de venda cadastrado com sucesso!",
    create_rejected: "Erro ao cadastrar o pedido. Entre em contato com o administrador do sistema.",
    updated: "Pedido atualizado com sucesso!",
    update_rejected: "Erro ao atualizar o pedido. Entre em contato com o administrador do sistema.",
    removed: "Pedido removido com sucesso!",
    remove_rejected: "Erro ao remover o pedido. Entre em contato com o administrador do sistema.",
};

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Client, Resource::Vehicle, Resource::SalesOrder];

    /// Path segment under which the resource is routed (`/lista/{segment}`).
    pub const fn path_segment(self) -> &'static str {
        match self {
            Resource::Client => "clientes",
            Resource::Vehicle => "carros",
            Resource::SalesOrder => "pedidos",
        }
    }

    /// Name used in log events.
    pub const fn label(self) -> &'static str {
        match self {
            Resource::Client => "client",
            Resource::Vehicle => "vehicle",
            Resource::SalesOrder => "sales_order",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Resource::Client => &CLIENT_MESSAGES,
            Resource::Vehicle => &VEHICLE_MESSAGES,
            Resource::SalesOrder => &SALES_ORDER_MESSAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_match_public_contract() {
        let messages = Resource::Client.messages();
        assert_eq!(
            messages.list_failed,
            "Não foi possível acessar a listagem de clientes"
        );
        assert_eq!(
            messages.succeeded(WriteOp::Create),
            "Cliente cadastrado com sucesso!"
        );
    }

    #[test]
    fn outcomes_are_distinct_per_operation() {
        for resource in Resource::ALL {
            let messages = resource.messages();
            for op in [WriteOp::Create, WriteOp::Update, WriteOp::Remove] {
                assert_ne!(messages.succeeded(op), messages.rejected(op));
                assert_ne!(messages.rejected(op), messages.list_failed);
            }
        }
    }

    #[test]
    fn path_segments_are_unique() {
        let segments: std::collections::HashSet<_> =
            Resource::ALL.iter().map(|r| r.path_segment()).collect();
        assert_eq!(segments.len(), Resource::ALL.len());
    }
}
