pub mod gastos;
pub mod vendas;
