mod nullable;
mod promotion;
