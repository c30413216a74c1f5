//! Static knowledge tables for the Wisdom AI chatbot.
//!
//! Order is significant: lookup takes the first category, then the first
//! key, whose text occurs in the message.

use super::knowledge::{Category, KnowledgeEntry};

macro_rules! entry {
    ($key:literal => $($answer:literal),+ $(,)?) => {
        KnowledgeEntry { key: $key, answers: &[$($answer),+] }
    };
}

/// Answers used when nothing in the tables matches.
pub static DEFAULT_ANSWERS: &[&str] = &[
    "Que pergunta interessante! Reflita: quais impactos? Que ângulos novos?",
    "Fascinante! Explore efeitos ou alternativas. Mais detalhes?",
];

/// Reflective questions for unmatched messages and for categories without their own.
pub static DEFAULT_QUESTIONS: &[&str] = &[
    "Quais implicações isso pode ter para sua operação?",
    "Como você pode explorar esse tema para melhorar seus processos?",
];

pub static CATEGORIES: &[Category] = &[
    Category {
        id: "industria_geral",
        entries: &[
            entry!("o que é uma indústria" => "É uma atividade econômica que transforma matéria-prima em produtos acabados ou semielaborados."),
            entry!("quais são os três setores da indústria" => "Indústria de base, de bens de consumo duráveis e de bens de consumo não duráveis."),
            entry!("o que é a revolução industrial" => "Um período de grandes mudanças tecnológicas e sociais iniciado no século XVIII, marcando o uso de máquinas nas fábricas."),
            entry!("qual foi a principal inovação da primeira revolução industrial" => "A máquina a vapor."),
            entry!("qual é o principal objetivo da indústria" => "Produzir bens ou serviços com eficiência para atender às necessidades do mercado."),
            entry!("o que é matéria-prima" => "Substância natural que será transformada em um produto."),
            entry!("o que é produção em massa" => "É a fabricação em grande escala de produtos padronizados."),
            entry!("qual é a diferença entre indústria pesada e leve" => "A pesada transforma matérias-primas em grandes volumes; a leve fabrica bens de consumo."),
            entry!("quais são os setores industriais" => "Primário, secundário e terciário."),
            entry!("o que é indústria de transformação" => "É o setor que transforma matérias-primas em produtos acabados."),
        ],
        reflective_questions: &[
            "Como esse conceito impacta a eficiência da sua operação industrial?",
            "De que forma você pode aplicar isso na sua indústria?",
        ],
    },
    Category {
        id: "industria_4_0",
        entries: &[
            entry!("o que é indústria 4.0" => "É a automação e troca de dados nas tecnologias de manufatura com uso de IoT, IA e robótica."),
            entry!("quais são os pilares da indústria 4.0" => "IoT, Big Data, Inteligência Artificial, Computação em Nuvem, Robótica e Impressão 3D."),
            entry!("o que é iot na indústria" => "Internet das Coisas: conexão entre máquinas, sensores e sistemas."),
            entry!("qual é o papel da inteligência artificial na indústria 4.0" => "Otimizar processos e tomar decisões com base em dados."),
            entry!("o que é manutenção preditiva" => "Monitoramento de máquinas para prever falhas antes que ocorram."),
            entry!("o que significa fábrica inteligente" => "Uma planta industrial automatizada, conectada e autônoma."),
            entry!("como a realidade aumentada é usada na indústria" => "Para manutenção, treinamento e visualização de processos."),
            entry!("o que é digital twin" => "Réplica digital de um processo ou produto físico para simulações."),
            entry!("como a indústria 4.0 impacta o trabalhador" => "Requer novas competências e habilidades digitais."),
            entry!("qual a diferença entre indústria 3.0 e 4.0" => "A 3.0 trouxe automação; a 4.0 traz integração inteligente entre máquinas e dados."),
        ],
        reflective_questions: &[
            "Como a adoção dessas tecnologias pode transformar sua produção?",
            "Quais desafios você prevê ao implementar essas inovações?",
        ],
    },
    Category {
        id: "processos_industriais",
        entries: &[
            entry!("o que é linha de produção" => "Sistema de produção onde o produto passa por várias etapas sequenciais."),
            entry!("o que é just-in-time" => "Sistema que produz conforme a demanda, sem excesso de estoque."),
            entry!("o que é célula de produção" => "Grupo de máquinas organizadas para fabricar produtos com mais flexibilidade."),
            entry!("qual o objetivo do controle de qualidade" => "Garantir que o produto final atenda aos padrões estabelecidos."),
            entry!("o que é automação industrial" => "Uso de sistemas e equipamentos automáticos para executar processos."),
            entry!("qual a importância da logística industrial" => "Organizar o transporte e armazenamento de matérias-primas e produtos."),
            entry!("o que é layout industrial" => "Organização física dos setores e máquinas de uma fábrica."),
            entry!("o que é eficiência produtiva" => "Capacidade de produzir com menor desperdício e maior rendimento."),
            entry!("o que é desperdício na produção" => "Tudo que não agrega valor ao produto final."),
            entry!("o que são sistemas integrados de gestão" => "Softwares que unem todas as áreas da empresa em um só sistema."),
        ],
        reflective_questions: &[
            "Como esse processo pode ser otimizado na sua operação atual?",
            "Que benefícios você espera ao adotar essa prática?",
        ],
    },
    Category {
        id: "sustentabilidade_industrial",
        entries: &[
            entry!("o que é sustentabilidade na indústria" => "Produção que respeita o meio ambiente e os recursos naturais."),
            entry!("o que é economia circular" => "Modelo que reaproveita resíduos e prolonga o ciclo de vida dos produtos."),
            entry!("como a indústria pode reduzir impactos ambientais" => "Investindo em tecnologias limpas e reciclagem."),
            entry!("o que é pegada de carbono" => "Quantidade de CO₂ emitida em uma atividade ou produto."),
            entry!("qual a importância da iso 14001" => "Norma que orienta sobre gestão ambiental nas empresas."),
            entry!("o que são resíduos industriais" => "Subprodutos ou sobras do processo de fabricação."),
            entry!("como a água é usada na indústria" => "Para resfriamento, limpeza e em processos químicos."),
            entry!("o que é produção mais limpa" => "Estratégia para reduzir o uso de recursos e resíduos."),
            entry!("como a indústria contribui para o desenvolvimento sustentável" => "Criando produtos mais duráveis e com menor impacto ambiental."),
            entry!("o que é responsabilidade socioambiental" => "Ações da empresa em prol do meio ambiente e da sociedade."),
        ],
        reflective_questions: &[
            "Como essa prática pode contribuir para a sustentabilidade da sua empresa?",
            "Que medidas você já toma para alinhar sua operação a esses princípios?",
        ],
    },
    Category {
        id: "seguranca_e_qualidade",
        entries: &[
            entry!("o que é epi" => "Equipamento de Proteção Individual."),
            entry!("o que é epc" => "Equipamento de Proteção Coletiva."),
            entry!("qual é o objetivo da cipa" => "Prevenir acidentes e doenças do trabalho."),
            entry!("o que é nr-12" => "Norma sobre segurança no trabalho em máquinas e equipamentos."),
            entry!("o que é ergonomia industrial" => "Adaptação do trabalho às características do trabalhador."),
            entry!("o que é um acidente de trabalho" => "Evento que ocorre durante a jornada e causa dano ao trabalhador."),
            entry!("o que é gestão da qualidade" => "Conjunto de práticas para manter e melhorar padrões de qualidade."),
            entry!("o que significa iso 9001" => "Norma internacional sobre gestão da qualidade."),
            entry!("o que é auditoria de qualidade" => "Avaliação dos processos para garantir que atendem aos requisitos."),
            entry!("o que é uma não conformidade" => "Quando algo não atende aos padrões ou normas estabelecidas."),
        ],
        reflective_questions: &[
            "Como você garante que esses padrões sejam aplicados na sua organização?",
            "Que impactos a segurança e qualidade têm na sua operação?",
        ],
    },
    Category {
        id: "tipos_de_industria",
        entries: &[
            entry!("o que produz a indústria têxtil" => "Tecidos e vestuário."),
            entry!("qual é o foco da indústria automobilística" => "Fabricação de veículos e seus componentes."),
            entry!("o que faz a indústria petroquímica" => "Derivados do petróleo, como plásticos e solventes."),
            entry!("o que é indústria farmacêutica" => "Produz medicamentos e produtos de saúde."),
            entry!("o que é indústria alimentícia" => "Processa e embala alimentos e bebidas."),
            entry!("o que é indústria metalúrgica" => "Transforma metais em produtos e peças."),
            entry!("o que é indústria de base" => "Fornece insumos para outras indústrias, como aço e cimento."),
            entry!("o que é indústria de bens duráveis" => "Produz itens com longa vida útil, como eletrodomésticos."),
            entry!("o que é indústria de bens não duráveis" => "Produz itens de consumo rápido, como alimentos e cosméticos."),
            entry!("o que é indústria de alta tecnologia" => "Empresas que usam ciência avançada, como microchips e robótica."),
        ],
        reflective_questions: &[
            "Como esse setor pode se alinhar aos objetivos da sua empresa?",
            "Quais inovações nesse tipo de indústria você considera mais promissoras?",
        ],
    },
    Category {
        id: "logistica_e_suprimentos",
        entries: &[
            entry!("o que é cadeia de suprimentos" => "Conjunto de etapas que leva o produto do fornecedor ao consumidor."),
            entry!("o que é logística reversa" => "Processo de devolução e reaproveitamento de produtos."),
            entry!("o que é lead time" => "Tempo total entre o pedido e a entrega de um produto."),
            entry!("o que é estoque mínimo" => "Quantidade mínima que deve ser mantida para evitar rupturas."),
            entry!("o que é kanban" => "Sistema visual para controlar o fluxo de produção e estoque."),
            entry!("o que é mrp" => "Planejamento de necessidades de materiais."),
            entry!("o que é fornecedor" => "Empresa ou pessoa que fornece matéria-prima ou insumos."),
            entry!("o que é transporte intermodal" => "Uso de diferentes modais (rodoviário, ferroviário, marítimo) para transportar carga."),
            entry!("o que é armazenagem" => "Atividade de guardar e conservar produtos ou materiais."),
            entry!("o que é roteirização" => "Definição do melhor caminho para entrega de produtos."),
        ],
        reflective_questions: &[
            "Como otimizar essa área pode melhorar sua cadeia de suprimentos?",
            "Que desafios você enfrenta na logística da sua operação?",
        ],
    },
    Category {
        id: "inovacao_e_tendencias",
        entries: &[
            entry!("o que é impressão 3d" => "Técnica de fabricar objetos camada por camada a partir de um modelo digital."),
            entry!("o que é manufatura aditiva" => "Outro nome para impressão 3D."),
            entry!("o que é big data industrial" => "Análise de grandes volumes de dados para otimizar processos."),
            entry!("o que é blockchain na indústria" => "Tecnologia usada para garantir rastreabilidade e segurança de dados."),
            entry!("o que é computação em nuvem" => "Armazenamento e processamento de dados pela internet."),
            entry!("o que é cibersegurança industrial" => "Proteção dos sistemas industriais contra ataques digitais."),
            entry!("o que é robótica colaborativa" => "Robôs que trabalham lado a lado com humanos."),
            entry!("o que é customização em massa" => "Produzir em larga escala com variações conforme desejo do cliente."),
            entry!("o que é fábrica modular" => "Unidade produtiva que pode ser adaptada e movida com facilidade."),
            entry!("o que é produtividade industrial" => "Relação entre o que se produz e os recursos utilizados."),
        ],
        reflective_questions: &[
            "Como essa tendência pode ser integrada à sua estratégia de inovação?",
            "Que oportunidades essa tecnologia oferece para seu negócio?",
        ],
    },
    Category {
        id: "curiosidades_e_cultura_industrial",
        entries: &[
            entry!("qual é o maior parque industrial do brasil" => "O de São Paulo."),
            entry!("qual foi a primeira indústria do brasil" => "A de tecidos, no século XIX."),
            entry!("o que é parque fabril" => "Conjunto de indústrias de uma região ou país."),
            entry!("qual país é líder mundial em produção industrial" => "A China."),
            entry!("qual é a importância da indústria para a economia" => "Gera empregos, riqueza e inovação."),
            entry!("o que é reindustrialização" => "Processo de recuperação ou modernização do setor industrial."),
            entry!("qual é a função de um engenheiro industrial" => "Planejar, supervisor e otimizar processos produtivos."),
            entry!("o que é manufatura enxuta" => "Filosofia de produção que busca eliminar desperdícios."),
            entry!("o que é o conceito de chão de fábrica" => "Área onde ocorre a produção efetiva da indústria."),
        ],
        reflective_questions: &[
            "Como essa informação pode inspirar melhorias na sua indústria?",
            "De que forma o contexto histórico influencia sua visão sobre a indústria?",
        ],
    },
    Category {
        id: "questoes_finais",
        entries: &[
            entry!("o que é benchmarking industrial" => "Comparação de práticas com empresas líderes para melhorar o desempenho."),
            entry!("o que é análise de custos industriais" => "Estudo dos gastos de produção para melhorar a rentabilidade."),
            entry!("o que é produtividade por trabalhador" => "Produção média gerada por cada colaborador."),
            entry!("o que é engenharia de produção" => "Área que integra conhecimento técnico e gerencial para otimizar processos."),
            entry!("o que é layout funcional" => "Organização por função ou tipo de máquina."),
            entry!("o que é qualidade total" => "Filosofia de excelência contínua em todas as áreas da empresa."),
            entry!("o que é tempo de ciclo" => "Tempo necessário para concluir uma operação ou produção."),
            entry!("o que é rastreabilidade industrial" => "Capacidade de seguir o histórico de um produto desde a origem."),
            entry!("o que é integração vertical" => "Quando a empresa controla todas as etapas do processo produtivo."),
            entry!("o que é terceirização na indústria" => "Contratação de serviços de outras empresas para executar certas atividades."),
        ],
        reflective_questions: &[
            "Como essa prática pode elevar a competitividade da sua empresa?",
            "Que estratégias você usa para implementar esses conceitos?",
        ],
    },
];
